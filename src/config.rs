//! Configuration loading from TOML files.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. TOML file specified via --config CLI flag (must exist)
//! 2. ./tmuxy.toml in the current directory
//! 3. $XDG_CONFIG_HOME/tmuxy/tmuxy.toml (or ~/.config/tmuxy/tmuxy.toml)
//! 4. Built-in defaults
//!
//! CLI flags (`--socket`, `--no-color`) override loaded values in `main`.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub tmux: TmuxConfig,
    pub display: DisplayConfig,
}

/// Settings stored under `[tmux]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Socket name passed as `tmux -L`, for addressing a non-default server.
    pub socket: Option<String>,
}

/// Settings stored under `[display]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colorize prompts and notifications.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw file shape; all sections optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    tmux: TmuxConfig,
    display: DisplayConfig,
}

/// Load configuration, resolving the file search order.
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    let config_text = if let Some(p) = path_override {
        // Explicit path — fail if it doesn't exist.
        std::fs::read_to_string(p)?
    } else if let Ok(text) = std::fs::read_to_string("tmuxy.toml") {
        text
    } else if let Some(global) = global_config_path() {
        std::fs::read_to_string(global).unwrap_or_default()
    } else {
        String::new()
    };

    parse_config(&config_text)
}

fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let parsed: FileConfig = toml::from_str(text)?;
    Ok(Config {
        tmux: parsed.tmux,
        display: parsed.display,
    })
}

fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("tmuxy").join("tmuxy.toml"))
}
