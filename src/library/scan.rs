use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::error::{Result, SplitError};

use super::model::{AUDIO_EXTENSIONS, CUE_EXTENSION, SPLIT_PREFIX, SourceFiles};

fn lowercase_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    lowercase_name(path)
        .map(|name| extensions.iter().any(|ext| name.ends_with(ext)))
        .unwrap_or(false)
}

pub(super) fn is_audio_file(path: &Path) -> bool {
    has_extension(path, AUDIO_EXTENSIONS)
}

pub(super) fn is_cue_file(path: &Path) -> bool {
    has_extension(path, &[CUE_EXTENSION])
}

pub(super) fn is_split_track(path: &Path) -> bool {
    lowercase_name(path)
        .map(|name| name.starts_with(SPLIT_PREFIX))
        .unwrap_or(false)
}

/// Regular files directly inside `dir`, in traversal order.
///
/// Unreadable entries are logged and skipped, so an unreadable `dir` simply
/// yields nothing.
fn shallow_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
}

/// First immediate child of `dir` accepted by `pred`.
///
/// Which file wins when several match depends on the order the filesystem
/// lists them in.
pub fn find_first<P>(dir: &Path, pred: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    shallow_files(dir).find(|path| pred(path.as_path()))
}

pub fn locate_audio(dir: &Path) -> Result<PathBuf> {
    find_first(dir, is_audio_file).ok_or_else(|| SplitError::AudioNotFound(dir.to_path_buf()))
}

pub fn locate_cue(dir: &Path) -> Result<PathBuf> {
    find_first(dir, is_cue_file).ok_or_else(|| SplitError::CueNotFound(dir.to_path_buf()))
}

/// Locate the album image and its cue sheet, audio first.
pub fn locate_sources(dir: &Path) -> Result<SourceFiles> {
    let audio = locate_audio(dir)?;
    let cue = locate_cue(dir)?;
    Ok(SourceFiles { audio, cue })
}

/// Every split track in `dir`, sorted by plain byte order of the path.
///
/// The order is not numeric-aware: `split-10.flac` sorts before
/// `split-2.flac`. The tagger maps cue track N onto the Nth entry.
pub fn split_tracks(dir: &Path) -> Vec<PathBuf> {
    let mut tracks: Vec<PathBuf> = shallow_files(dir).filter(|p| is_split_track(p)).collect();
    tracks.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    tracks
}
