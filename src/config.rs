//! # Configuration
//!
//! Settings resolve as: defaults, then an optional JSON file, then CLI flags.
//! The file is `wordbook.json` in the working directory unless `--config`
//! points elsewhere. Every field may be omitted.

use crate::input::Bindings;
use crate::view::Action;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "wordbook.json";
pub const DEFAULT_WORDS_FILE: &str = "word.csv";
pub const DEFAULT_FONT_FILE: &str = "assets/font.ttf";
pub const DEFAULT_SCALE: f32 = 3.0;
const MAX_SCALE: f32 = 8.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read config '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Key names per action, as understood by `egui::Key::from_name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyConfig {
    pub prev: Option<Vec<String>>,
    pub next: Option<Vec<String>>,
    pub toggle: Option<Vec<String>>,
    pub quit: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub words_path: PathBuf,
    pub asset_dir: PathBuf,
    pub font_path: PathBuf,
    pub scale: f32,
    pub log_level: String,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_FILE),
            asset_dir: PathBuf::from("."),
            font_path: PathBuf::from(DEFAULT_FONT_FILE),
            scale: DEFAULT_SCALE,
            log_level: "info".to_string(),
            keys: KeyConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config.normalized())
    }

    /// Reads `explicit` if given, else the default file. A missing default
    /// file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::from_file(Path::new(DEFAULT_CONFIG_FILE)) {
                Err(ConfigError::NotFound(_)) => Ok(Self::default()),
                other => other,
            },
        }
    }

    /// Replaces out-of-range values with defaults.
    pub fn normalized(mut self) -> Self {
        if !self.scale.is_finite() || self.scale < 1.0 || self.scale > MAX_SCALE {
            self.scale = DEFAULT_SCALE;
        }
        self
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Physical window size for the logical screen at this scale.
    pub fn window_size(&self) -> [f32; 2] {
        [
            crate::view::SCREEN_WIDTH * self.scale,
            crate::view::SCREEN_HEIGHT * self.scale,
        ]
    }

    /// Name shown in the no-data message.
    pub fn words_name(&self) -> String {
        self.words_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.words_path.display().to_string())
    }

    pub fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::default();
        let overrides = [
            (Action::Prev, &self.keys.prev),
            (Action::Next, &self.keys.next),
            (Action::Toggle, &self.keys.toggle),
            (Action::Quit, &self.keys.quit),
        ];
        for (action, names) in overrides {
            if let Some(names) = names {
                bindings.rebind_keys(action, names);
            }
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Key;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.words_path, PathBuf::from("word.csv"));
        assert_eq!(config.scale, 3.0);
        assert_eq!(config.window_size(), [660.0, 540.0]);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        assert_eq!(config.words_name(), "word.csv");
    }

    #[test]
    fn test_from_file_partial() {
        let test_file = "test_config_partial.json";
        fs::write(
            test_file,
            r#"{ "words_path": "decks/animals.csv", "scale": 2.0, "keys": { "toggle": ["Space"] } }"#,
        )
        .unwrap();

        let config = Config::from_file(Path::new(test_file)).unwrap();
        assert_eq!(config.words_path, PathBuf::from("decks/animals.csv"));
        assert_eq!(config.words_name(), "animals.csv");
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.asset_dir, PathBuf::from("."));

        let bindings = config.bindings();
        assert_eq!(bindings.key_action(Key::Space), Some(Action::Toggle));
        assert_eq!(bindings.key_action(Key::Z), None);
        assert_eq!(bindings.key_action(Key::Q), Some(Action::Quit));

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_from_file_invalid_json() {
        let test_file = "test_config_invalid.json";
        fs::write(test_file, "{ this is not valid json }").unwrap();

        let result = Config::from_file(Path::new(test_file));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load(Some(Path::new("nonexistent_config_xyz123.json")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_out_of_range_scale_is_reset() {
        let config = Config {
            scale: 0.0,
            ..Config::default()
        }
        .normalized();
        assert_eq!(config.scale, DEFAULT_SCALE);

        let config = Config {
            scale: f32::NAN,
            ..Config::default()
        }
        .normalized();
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);

        let config = Config {
            log_level: "debug".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
