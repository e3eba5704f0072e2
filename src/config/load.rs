use std::env;
use std::path::{Path, PathBuf};

use log::LevelFilter;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// Environment variables (prefix `CUESPLIT__`) win over the optional config
/// file, which wins over struct defaults.
impl Settings {
    /// Load settings from the environment and `config_path`, if given. A
    /// missing file is not an error.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CUESPLIT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let tools = [
            ("tools.splitter", &self.tools.splitter),
            ("tools.converter", &self.tools.converter),
            ("tools.tagger", &self.tools.tagger),
        ];
        for (key, value) in tools {
            if value.trim().is_empty() {
                return Err(format!("{key} must not be empty"));
            }
        }
        if self.encoding.fallback.trim().is_empty() {
            return Err("encoding.fallback must not be empty".to_string());
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed form of `logging.level`.
    pub fn log_level(&self) -> Result<LevelFilter, String> {
        self.logging
            .level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| format!("logging.level `{}` is not a log level", self.logging.level))
    }
}

/// Resolve the config path from `CUESPLIT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CUESPLIT_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/cuesplit/config.toml`
/// or `~/.config/cuesplit/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("cuesplit").join("config.toml"))
}
