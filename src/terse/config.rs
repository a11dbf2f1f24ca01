//! # Configuration
//!
//! Settings live in `config.json` inside a config directory: the project's
//! `.terse/` when it exists, otherwise the platform config directory. Missing
//! files and missing keys fall back to defaults.
//!
//! | Key             | Default  | Description                                    |
//! |-----------------|----------|------------------------------------------------|
//! | `file-ext`      | `.terse` | Extension added to document names without one  |
//! | `tagged`        | `true`   | Report coordinates as `p1g1…` instead of `1-1…` |
//! | `preview-width` | `60`     | Width of the one-line previews in `list`       |

use crate::error::{Result, TerseError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".terse";
const DEFAULT_PREVIEW_WIDTH: usize = 60;

/// Keys accepted by [`TerseConfig::get`] and [`TerseConfig::set`].
pub const KEYS: [&str; 3] = ["file-ext", "tagged", "preview-width"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TerseConfig {
    /// Extension for document files (e.g., ".terse", ".txt")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Whether coordinates are reported in tagged form
    #[serde(default = "default_tagged")]
    pub tagged: bool,

    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_tagged() -> bool {
    true
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

impl Default for TerseConfig {
    fn default() -> Self {
        Self {
            file_ext: default_file_ext(),
            tagged: default_tagged(),
            preview_width: default_preview_width(),
        }
    }
}

impl TerseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TerseConfig = serde_json::from_str(&content)?;
        tracing::trace!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file-ext" => Some(self.file_ext.clone()),
            "tagged" => Some(self.tagged.to_string()),
            "preview-width" => Some(self.preview_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file-ext" => self.set_file_ext(value),
            "tagged" => {
                self.tagged = value
                    .parse()
                    .map_err(|_| TerseError::Api(format!("Expected true or false, got {}", value)))?
            }
            "preview-width" => {
                self.preview_width = value
                    .parse()
                    .map_err(|_| TerseError::Api(format!("Expected a width, got {}", value)))?
            }
            _ => return Err(TerseError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
