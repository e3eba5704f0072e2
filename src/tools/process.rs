//! Blocking subprocess helper shared by the splitter, converter and tagger.

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{Result, SplitError};

/// Where the child's standard output goes. Stdin and stderr are always
/// inherited.
#[derive(Debug, Clone, Copy)]
pub enum StdoutTarget<'a> {
    Inherit,
    /// Created (or truncated) before the child starts.
    File(&'a Path),
}

/// One external command, run from the working directory.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub dir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run to completion, blocking until the child exits.
    ///
    /// A child that cannot be started is always an error; a non-zero exit is
    /// one only when `check_status` is set.
    pub fn run(&self, stdout: StdoutTarget<'_>, check_status: bool) -> Result<()> {
        info!("{self}");

        let stdout = match stdout {
            StdoutTarget::Inherit => Stdio::inherit(),
            StdoutTarget::File(path) => {
                let file = File::create(path).map_err(|source| SplitError::CreateOutput {
                    path: path.to_path_buf(),
                    source,
                })?;
                Stdio::from(file)
            }
        };

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.dir)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SplitError::ToolStart {
                program: self.program.clone(),
                dir: self.dir.clone(),
                source,
            })?;

        debug!("{} finished with {status}", self.program);
        if check_status && !status.success() {
            return Err(SplitError::ToolFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.program)?;
        for arg in &self.args {
            write!(f, ", {}", arg.to_string_lossy())?;
        }
        write!(f, "]")
    }
}
