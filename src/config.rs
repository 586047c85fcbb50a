//! Application configuration management.
//!
//! This module handles the persistent configuration for chell: the render mode
//! and height used when none is given on the command line, and an optional log
//! file. Configuration is stored in the user's config directory (typically
//! ~/.config/chell/config.toml); a missing file means all defaults.

use crate::constants::DEFAULT_MODE;
use crate::waveform::{RenderConfig, RenderMode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_mode")]
    pub default_mode: String,
    #[serde(default)]
    pub default_height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            default_mode: default_mode(),
            default_height: 0,
            log_file: None,
        }
    }

    pub fn config_dir() -> Result<PathBuf, Box<dyn Error>> {
        // Check for XDG_CONFIG_HOME first (useful for testing)
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config).join("chell")
        } else {
            dirs::config_dir()
                .ok_or("Unable to find config directory")?
                .join("chell")
        };
        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf, Box<dyn Error>> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self, Box<dyn Error>> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Default::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    pub fn exists() -> Result<bool, Box<dyn Error>> {
        Ok(Self::config_path()?.exists())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        match key {
            "default_mode" => {
                let mode: RenderMode = value.parse()?;
                self.default_mode = mode.to_string();
            }
            "default_height" => {
                self.default_height = value
                    .parse::<i32>()
                    .map_err(|_| "Value must be a whole number of rows")?;
            }
            "log_file" => {
                self.log_file = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => return Err(format!("Unknown configuration key: {key}").into()),
        }
        Ok(())
    }

    /// Log file location with `~` expanded, if one is configured
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()))
    }

    /// Open the configured log file for writing.
    ///
    /// A path that cannot be created is reported on stderr and skipped, so a
    /// bad `log_file` never blocks the commands that would fix it.
    pub fn open_log_file(&self) -> Option<File> {
        let path = self.log_file_path()?;
        match File::create(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!(
                    "Warning: cannot open log file {}: {e}; file logging disabled",
                    path.display()
                );
                None
            }
        }
    }

    /// Check that stored values can actually be used for rendering.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        self.render_config(None, None)?;
        Ok(())
    }

    /// Merge command-line overrides with the stored defaults.
    ///
    /// The resulting mode is validated, so a bad name from either source is
    /// reported before any audio is decoded.
    pub fn render_config(
        &self,
        mode: Option<&str>,
        height: Option<i32>,
    ) -> Result<RenderConfig, Box<dyn Error>> {
        let mode = mode.unwrap_or(self.default_mode.as_str());
        let height = height.unwrap_or(self.default_height);
        Ok(RenderConfig::new(mode, height)?)
    }
}
