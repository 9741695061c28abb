//! Configuration for the terminal frontend, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "checkers.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    /// ● ○ ♚ ♔
    Unicode,
    /// d l D L, as in board notation
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub glyphs: GlyphSet,
    /// Highlight the squares the selected piece may move to.
    pub show_hints: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Logs are appended here; the board owns the terminal.
    pub file: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::Unicode,
            show_hints: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            file: PathBuf::from("checkers.log"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.glyphs, GlyphSet::Unicode);
        assert!(config.display.show_hints);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            [display]
            glyphs = "ascii"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.glyphs, GlyphSet::Ascii);
        assert!(config.display.show_hints);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_log_file_setting() {
        let config: Config = toml::from_str("[log]\nfile = \"logs/game.log\"").unwrap();
        assert_eq!(config.log.file, PathBuf::from("logs/game.log"));
        assert_eq!(config.log.filter, "warn");
        assert_eq!(Config::default().log.file, PathBuf::from("checkers.log"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("[display]\ncolour = \"red\"").is_err());
        assert!(toml::from_str::<Config>("[display]\nglyphs = \"emoji\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load_or_default(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(matches!(
            Config::load(Path::new("definitely/not/here.toml")),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
