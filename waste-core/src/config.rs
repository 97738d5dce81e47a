//! Runtime configuration.
//!
//! Defaults reproduce the fixed constants of the classic build. A TOML file
//! may override any subset of fields; command-line flags are applied on top
//! by the binary.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// How often the window is repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedrawMode {
    /// Repaint every frame at `fps`.
    #[default]
    EveryFrame,
    /// Repaint only when the counter changes or the window is exposed.
    OnChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub normal_font_size: f32,
    pub counter_font_size: f32,
    pub font_path: PathBuf,
    pub music_path: PathBuf,
    pub muted: bool,
    pub redraw: RedrawMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Waste".to_string(),
            width: 800,
            height: 600,
            fps: 60,
            normal_font_size: 30.0,
            counter_font_size: 80.0,
            font_path: PathBuf::from("res/DroidSans.ttf"),
            music_path: PathBuf::from("res/music.wav"),
            muted: false,
            redraw: RedrawMode::EveryFrame,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the window and text engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, size) in [
            ("normal_font_size", self.normal_font_size),
            ("counter_font_size", self.counter_font_size),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("font size must be a positive number, got {size}"),
                });
            }
        }
        for (field, dim) in [("width", self.width), ("height", self.height)] {
            if dim == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read when present, and the built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Look for both assets inside `dir`, keeping their file names.
    pub fn rebase_assets(&mut self, dir: &Path) {
        self.font_path = rebase(dir, &self.font_path);
        self.music_path = rebase(dir, &self.music_path);
    }
}

/// `<config dir>/waste/config.toml` for the current platform.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "waste").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn rebase(dir: &Path, file: &Path) -> PathBuf {
    match file.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}
