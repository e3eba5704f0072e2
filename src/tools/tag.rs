use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;

use super::process::{Invocation, StdoutTarget};

/// Build `<tagger> <converted-cue> <track>...`, tracks in the order given.
pub fn tag_invocation(tagger: &str, dir: &Path, converted_cue: &Path, tracks: &[PathBuf]) -> Invocation {
    Invocation::new(tagger, dir)
        .arg(converted_cue)
        .args(tracks.iter().map(|t| t.as_os_str()))
}

/// Write cue metadata into the split tracks. Cue track N lands on `tracks[N - 1]`.
pub fn tag_tracks(
    tagger: &str,
    dir: &Path,
    converted_cue: &Path,
    tracks: &[PathBuf],
    check_status: bool,
) -> Result<()> {
    info!("Adding tags...");
    tag_invocation(tagger, dir, converted_cue, tracks).run(StdoutTarget::Inherit, check_status)
}
