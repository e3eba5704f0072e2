use std::path::PathBuf;

/// Extensions recognised as the single-file album image.
pub const AUDIO_EXTENSIONS: &[&str] = &[".ape", ".flac", ".wav"];

pub const CUE_EXTENSION: &str = ".cue";

/// Name prefix the splitter gives to every track it writes.
pub const SPLIT_PREFIX: &str = "split-";

/// UTF-8 copy of the cue sheet, written next to the original.
pub const CONVERTED_CUE_NAME: &str = "converted__.cue";

/// The two inputs located in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFiles {
    pub audio: PathBuf,
    pub cue: PathBuf,
}
