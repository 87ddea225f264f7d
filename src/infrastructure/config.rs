//! Configuration management

use crate::error::{Result, RosterError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "roster.toml";
pub const DATA_FILE_ENV: &str = "ROSTER_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: PathBuf,
    pub csv_file: PathBuf,
    pub xlsx_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("students.txt"),
            csv_file: PathBuf::from("students.csv"),
            xlsx_file: PathBuf::from("students.xlsx"),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load roster.toml from the given directory, falling back to defaults when absent.
    /// Relative paths are resolved against `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default().resolved_against(dir));
            }
            Err(e) => return Err(RosterError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            RosterError::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
        })?;

        Ok(config.resolved_against(dir))
    }

    /// Apply the ROSTER_FILE override, then an explicit path if one was given
    pub fn with_overrides(mut self, data_file: Option<PathBuf>) -> Self {
        if let Ok(path) = std::env::var(DATA_FILE_ENV) {
            if !path.trim().is_empty() {
                self.data_file = PathBuf::from(path);
            }
        }
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }

    fn resolved_against(mut self, dir: &Path) -> Self {
        for path in [&mut self.data_file, &mut self.csv_file, &mut self.xlsx_file] {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
        self
    }
}
