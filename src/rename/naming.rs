use super::tags::TrackTags;

/// Characters that cannot appear in a single path component.
fn path_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == '/' || c == '\0' { '_' } else { c })
        .collect()
}

/// `"<artist> -  <album> - <title>.flac"`. The double space after the first
/// hyphen is part of the naming convention.
pub fn track_file_name(tags: &TrackTags) -> String {
    format!(
        "{} -  {} - {}.flac",
        path_safe(&tags.artist),
        path_safe(&tags.album),
        path_safe(&tags.title)
    )
}
