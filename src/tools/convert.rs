use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::encoding;
use crate::error::{Result, SplitError};
use crate::library::CONVERTED_CUE_NAME;

use super::process::{Invocation, StdoutTarget};

/// Sibling path of `cue` where its UTF-8 copy lives.
pub fn converted_cue_path(cue: &Path) -> PathBuf {
    cue.with_file_name(CONVERTED_CUE_NAME)
}

/// Build `<converter> -f <encoding> -t utf8 <cue>`.
pub fn convert_invocation(converter: &str, dir: &Path, from_encoding: &str, cue: &Path) -> Invocation {
    Invocation::new(converter, dir)
        .args(["-f", from_encoding, "-t", "utf8"])
        .arg(cue)
}

/// Produce the UTF-8 copy of `cue` and return its path.
///
/// Does nothing when the copy already exists, whatever its content. When the
/// converter cannot start, or exits non-zero while `check_status` is set, the
/// half-written copy is removed so the next run converts again.
pub fn convert_cue(
    converter: &str,
    dir: &Path,
    cue: &Path,
    fallback_encoding: &str,
    check_status: bool,
) -> Result<PathBuf> {
    let converted = converted_cue_path(cue);
    if converted.exists() {
        info!("{} already exists, skipping conversion", converted.display());
        return Ok(converted);
    }

    let bytes = fs::read(cue).map_err(|source| SplitError::ReadCue {
        path: cue.to_path_buf(),
        source,
    })?;

    let detected = encoding::detect(&bytes);
    match detected {
        Some(name) => info!("Detected CUE encoding = {name}"),
        None => info!("Cannot detect CUE encoding, using {fallback_encoding}"),
    }
    let from_encoding = encoding::choose(detected, fallback_encoding);

    let result = convert_invocation(converter, dir, &from_encoding, cue)
        .run(StdoutTarget::File(&converted), check_status);

    if result.is_err() && converted.exists() {
        if let Err(err) = fs::remove_file(&converted) {
            warn!("cannot remove {}: {err}", converted.display());
        }
    }
    result.map(|()| converted)
}
