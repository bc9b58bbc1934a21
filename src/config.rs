//! Demo configuration parsed from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_BOARD_SIZE: u32 = 20;
pub const DEFAULT_ZOOM_CLICKS: i32 = 0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoConfig {
    pub width: f64,
    pub height: f64,
    pub board_size: u32,
    /// Key presses applied to the demo block, one character each.
    pub moves: String,
    /// Wheel clicks at the surface centre. Positive zooms in.
    pub zoom_clicks: i32,
    pub format: OutputFormat,
    pub output: OutputTarget,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            board_size: DEFAULT_BOARD_SIZE,
            moves: String::new(),
            zoom_clicks: DEFAULT_ZOOM_CLICKS,
            format: OutputFormat::Svg,
            output: OutputTarget::Stdout,
        }
    }
}

impl DemoConfig {
    /// Build typed demo config from environment variables.
    ///
    /// All optional:
    /// - `ISO_WIDTH`: surface width in pixels, default 800
    /// - `ISO_HEIGHT`: surface height in pixels, default 600
    /// - `ISO_BOARD_SIZE`: cells per ground side, default 20
    /// - `ISO_MOVES`: block key presses (`w s d a r f`), default empty
    /// - `ISO_ZOOM_CLICKS`: signed wheel clicks, default 0
    /// - `ISO_FORMAT`: `svg` (default) or `json`
    /// - `ISO_OUTPUT`: file path, or `-` (default) for stdout
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            width: env_parse("ISO_WIDTH", DEFAULT_WIDTH)?,
            height: env_parse("ISO_HEIGHT", DEFAULT_HEIGHT)?,
            board_size: env_parse("ISO_BOARD_SIZE", DEFAULT_BOARD_SIZE)?,
            moves: env_string("ISO_MOVES").unwrap_or_default(),
            zoom_clicks: env_parse("ISO_ZOOM_CLICKS", DEFAULT_ZOOM_CLICKS)?,
            format: parse_format(env_string("ISO_FORMAT").as_deref())?,
            output: parse_output(env_string("ISO_OUTPUT").as_deref()),
        })
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env_string(key) {
        None => Ok(default),
        Some(raw) if raw.is_empty() => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::ConfigParse(format!("invalid {key}: '{raw}'"))),
    }
}

fn parse_format(raw: Option<&str>) -> Result<OutputFormat, ConfigError> {
    match raw.unwrap_or("svg") {
        "svg" | "" => Ok(OutputFormat::Svg),
        "json" => Ok(OutputFormat::Json),
        other => Err(ConfigError::ConfigParse(format!(
            "unsupported ISO_FORMAT '{other}' (expected 'svg' or 'json')"
        ))),
    }
}

fn parse_output(raw: Option<&str>) -> OutputTarget {
    match raw {
        None | Some("" | "-") => OutputTarget::Stdout,
        Some(path) => OutputTarget::File(PathBuf::from(path)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
