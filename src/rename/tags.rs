use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::tag::Accessor;

use crate::error::{Result, SplitError};

/// The only tag fields the renamer looks at. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
    pub title: String,
}

/// Read artist, album and title from the file's primary tag, or the first
/// tag it carries when there is no primary one.
pub fn read_track_tags(path: &Path) -> Result<TrackTags> {
    let tagged = lofty::read_from_path(path).map_err(|source| SplitError::ReadTags {
        path: path.to_path_buf(),
        source,
    })?;

    let tag = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .ok_or_else(|| SplitError::NoTag(path.to_path_buf()))?;

    Ok(TrackTags {
        artist: tag.artist().map(|v| v.into_owned()).unwrap_or_default(),
        album: tag.album().map(|v| v.into_owned()).unwrap_or_default(),
        title: tag.title().map(|v| v.into_owned()).unwrap_or_default(),
    })
}
