use std::env;
use std::path::PathBuf;

use log::{LevelFilter, debug, info, warn};

use crate::config::{self, Settings};
use crate::error::{Result, SplitError};
use crate::pipeline;

mod logging;

/// Settings for this run, plus a complaint to log once logging is up when
/// the config had to be discarded.
fn load_settings() -> (Settings, Option<String>) {
    let path = config::resolve_config_path();
    let loaded = Settings::load_from(path.as_deref())
        .map_err(|e| format!("failed to load config, using defaults: {e}"))
        .and_then(|s| {
            s.validate()
                .map(|()| s)
                .map_err(|msg| format!("invalid config, using defaults: {msg}"))
        });

    match loaded {
        Ok(s) => {
            if let Some(p) = path.filter(|p| p.exists()) {
                debug!("config file: {}", p.display());
            }
            (s, None)
        }
        Err(msg) => (Settings::default(), Some(msg)),
    }
}

pub fn run() -> Result<()> {
    let dir = env::args_os().nth(1).map(PathBuf::from).ok_or(SplitError::Usage)?;

    let (settings, complaint) = load_settings();
    logging::init_logging(settings.log_level().unwrap_or(LevelFilter::Info));
    if let Some(msg) = complaint {
        warn!("{msg}");
    }
    debug!("{settings:?}");

    let outcome = pipeline::run(&dir, &settings)?;
    info!(
        "Job done: {} tracks, cue sheet at {}",
        outcome.tracks.len(),
        outcome.converted_cue.display()
    );
    Ok(())
}
