use std::path::Path;

use log::info;

use crate::error::Result;
use crate::library::SourceFiles;

use super::process::{Invocation, StdoutTarget};

/// Build `<splitter> -f <cue> -o flac -d <dir> <audio>`.
pub fn split_invocation(splitter: &str, dir: &Path, sources: &SourceFiles) -> Invocation {
    Invocation::new(splitter, dir)
        .arg("-f")
        .arg(&sources.cue)
        .args(["-o", "flac", "-d"])
        .arg(dir)
        .arg(&sources.audio)
}

/// Cut the album image into `split-*.flac` tracks inside `dir`.
pub fn split_audio(
    splitter: &str,
    dir: &Path,
    sources: &SourceFiles,
    check_status: bool,
) -> Result<()> {
    info!("Splitting...");
    split_invocation(splitter, dir, sources).run(StdoutTarget::Inherit, check_status)
}
