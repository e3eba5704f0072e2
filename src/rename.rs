//! Tag read-back and renaming of the split tracks.

mod naming;
mod tags;

pub use naming::*;
pub use tags::*;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, SplitError};

/// Rename one track after its tags and return the new path.
pub fn rename_track(path: &Path) -> Result<PathBuf> {
    let readonly = fs::metadata(path)
        .map(|m| m.permissions().readonly())
        .map_err(|source| SplitError::Inspect {
            path: path.to_path_buf(),
            source,
        })?;
    if readonly {
        return Err(SplitError::ReadOnly(path.to_path_buf()));
    }

    let tags = read_track_tags(path)?;
    let target = path.with_file_name(track_file_name(&tags));
    if target.exists() {
        return Err(SplitError::TargetExists(target));
    }

    fs::rename(path, &target).map_err(|source| SplitError::Rename {
        from: path.to_path_buf(),
        to: target.clone(),
        source,
    })?;
    info!("{} -> {}", path.display(), target.display());
    Ok(target)
}

/// Rename every track in order, stopping at the first failure. Tracks renamed
/// before the failure keep their new names.
pub fn rename_tracks(tracks: &[PathBuf]) -> Result<Vec<PathBuf>> {
    tracks.iter().map(|track| rename_track(track)).collect()
}
