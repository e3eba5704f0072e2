use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cuesplit/config.toml` or `~/.config/cuesplit/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CUESPLIT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tools: ToolSettings,
    pub encoding: EncodingSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

/// External programs driven by the pipeline. Either bare names looked up on
/// `PATH` or absolute paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Cue-based splitter, invoked as `<splitter> -f <cue> -o flac -d <dir> <audio>`.
    pub splitter: String,
    /// Text recoder, invoked as `<converter> -f <encoding> -t utf8 <cue>`.
    pub converter: String,
    /// Cue-to-tag writer, invoked as `<tagger> <converted-cue> <track>...`.
    pub tagger: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            splitter: "shnsplit".to_string(),
            converter: "iconv".to_string(),
            tagger: "cuetag.sh".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncodingSettings {
    /// Source encoding assumed when the cue sheet's charset cannot be detected.
    pub fallback: String,
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            fallback: "gbk".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Abort the run when an external tool exits with a non-zero status.
    pub check_exit_status: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            check_exit_status: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
