//! The whole run for one directory: locate, split, convert, tag, rename.
//!
//! Stages hand off through the filesystem only and run strictly in order;
//! the first failure ends the run and nothing already on disk is undone.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::library;
use crate::rename;
use crate::tools;

/// Files produced by a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub converted_cue: PathBuf,
    pub tracks: Vec<PathBuf>,
}

pub fn run(dir: &Path, settings: &Settings) -> Result<Outcome> {
    let check_status = settings.pipeline.check_exit_status;

    let sources = library::locate_sources(dir)?;
    info!("Audio file: {}", sources.audio.display());
    info!("Cue file: {}", sources.cue.display());

    tools::split_audio(&settings.tools.splitter, dir, &sources, check_status)?;

    let converted_cue = tools::convert_cue(
        &settings.tools.converter,
        dir,
        &sources.cue,
        &settings.encoding.fallback,
        check_status,
    )?;

    let split = library::split_tracks(dir);
    if split.is_empty() {
        warn!("no split-* tracks found in {}", dir.display());
    }

    tools::tag_tracks(&settings.tools.tagger, dir, &converted_cue, &split, check_status)?;
    let tracks = rename::rename_tracks(&split)?;

    Ok(Outcome {
        converted_cue,
        tracks,
    })
}
