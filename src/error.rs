use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Every way a run can stop. All of them are terminal: nothing is retried and
/// stages that already finished are left as they are on disk.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("usage: cuesplit <directory>")]
    Usage,

    #[error("no audio file (.ape, .flac, .wav) found in {}", .0.display())]
    AudioNotFound(PathBuf),

    #[error("no cue file found in {}", .0.display())]
    CueNotFound(PathBuf),

    #[error("cannot start {program} in {}: {source}", .dir.display())]
    ToolStart {
        program: String,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    ToolFailed { program: String, status: ExitStatus },

    #[error("cannot read the cue file {}: {source}", .path.display())]
    ReadCue {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read tags from {}: {source}", .path.display())]
    ReadTags {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    #[error("cannot inspect {}: {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} carries no tag", .0.display())]
    NoTag(PathBuf),

    #[error("{} is read-only", .0.display())]
    ReadOnly(PathBuf),

    #[error("cannot rename to {}: target already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("cannot rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;
