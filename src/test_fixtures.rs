//! Test fixtures: in-memory FLAC files and stand-in scripts for the external
//! tools.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

static PROCESS_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Held by tests that write a script and then exec it. A fork from another
/// test thread while the script is still open for writing makes the exec
/// fail with ETXTBSY.
pub fn process_lock() -> MutexGuard<'static, ()> {
    PROCESS_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

const STREAMINFO: u8 = 0;
const VORBIS_COMMENT: u8 = 4;

fn block_header(last: bool, kind: u8, len: usize) -> [u8; 4] {
    let len = len as u32;
    [
        (u8::from(last) << 7) | kind,
        (len >> 16) as u8,
        (len >> 8) as u8,
        len as u8,
    ]
}

fn streaminfo() -> Vec<u8> {
    let sample_rate: u64 = 44_100;
    let packed = (sample_rate << 44) | (1 << 41) | (15 << 36) | sample_rate;

    let mut body = Vec::with_capacity(34);
    body.extend_from_slice(&4096u16.to_be_bytes());
    body.extend_from_slice(&4096u16.to_be_bytes());
    body.extend_from_slice(&[0; 6]);
    body.extend_from_slice(&packed.to_be_bytes());
    body.extend_from_slice(&[0; 16]);
    body
}

fn vorbis_comment(fields: &[(&str, &str)]) -> Vec<u8> {
    let vendor = b"cuesplit tests";
    let mut body = Vec::new();
    body.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    body.extend_from_slice(vendor);
    body.extend_from_slice(&(fields.len() as u32).to_le_bytes());
    for (key, value) in fields {
        let comment = format!("{key}={value}");
        body.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        body.extend_from_slice(comment.as_bytes());
    }
    body
}

/// A metadata-only FLAC stream (44.1 kHz stereo, 16 bit) carrying `fields`
/// as Vorbis comments.
pub fn tagged_flac(fields: &[(&str, &str)]) -> Vec<u8> {
    let info = streaminfo();
    let comment = vorbis_comment(fields);

    let mut out = b"fLaC".to_vec();
    out.extend_from_slice(&block_header(false, STREAMINFO, info.len()));
    out.extend_from_slice(&info);
    out.extend_from_slice(&block_header(true, VORBIS_COMMENT, comment.len()));
    out.extend_from_slice(&comment);
    out
}

/// A FLAC stream with no tag block at all.
pub fn untagged_flac() -> Vec<u8> {
    let info = streaminfo();
    let mut out = b"fLaC".to_vec();
    out.extend_from_slice(&block_header(true, STREAMINFO, info.len()));
    out.extend_from_slice(&info);
    out
}

pub fn write_tagged_flac(path: &Path, artist: &str, album: &str, title: &str) {
    fs::write(
        path,
        tagged_flac(&[("ARTIST", artist), ("ALBUM", album), ("TITLE", title)]),
    )
    .unwrap();
}

/// Write an executable `/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A script that appends its arguments, one per line, to `log` and then
/// exits with `code`.
#[cfg(unix)]
pub fn recording_script(dir: &Path, name: &str, log: &Path, code: i32) -> PathBuf {
    write_script(
        dir,
        name,
        &format!(
            "for a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done\nexit {code}",
            log.display()
        ),
    )
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
