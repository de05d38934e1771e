#![cfg(feature = "std")]

//! Persisted game settings.
//!
//! Settings live in a small JSON file (`{"rows": 6, "columns": 7}`) and are
//! handed to the game as an explicit value; nothing reads the file behind the
//! caller's back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{Dimensions, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};

/// File name used when no `--settings` path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write settings to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Grid size and presentation preferences.
///
/// Sizes are kept as signed integers so a hand-edited file with a negative or
/// huge value still loads; any JSON number saturates into `i64` and is then
/// clamped into `[4, 10]` on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "saturating_size")]
    pub rows: i64,
    #[serde(deserialize_with = "saturating_size")]
    pub columns: i64,
    pub animate_drops: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rows: DEFAULT_ROWS as i64,
            columns: DEFAULT_COLUMNS as i64,
            animate_drops: true,
        }
    }
}

/// Read any JSON number as a size. Integers beyond `i64` and floats saturate
/// instead of failing.
fn saturating_size<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    Ok(match (number.as_i64(), number.as_u64(), number.as_f64()) {
        (Some(value), _, _) => value,
        (None, Some(_), _) => i64::MAX,
        // float casts saturate and map NaN to 0
        (None, None, Some(value)) => value as i64,
        (None, None, None) => 0,
    })
}

fn clamp_signed(value: i64) -> i64 {
    value.clamp(MIN_DIMENSION as i64, MAX_DIMENSION as i64)
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings.clamped())
    }

    /// Write settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Copy with both sizes clamped into the allowed range.
    pub fn clamped(self) -> Self {
        Settings {
            rows: clamp_signed(self.rows),
            columns: clamp_signed(self.columns),
            ..self
        }
    }

    /// Copy with new sizes, clamped.
    pub fn with_size(self, rows: i64, columns: i64) -> Self {
        Settings {
            rows,
            columns,
            ..self
        }
        .clamped()
    }

    /// Grid dimensions to construct the engine with.
    pub fn dimensions(&self) -> Dimensions {
        let settings = self.clamped();
        Dimensions::new(settings.rows as usize, settings.columns as usize)
    }
}
