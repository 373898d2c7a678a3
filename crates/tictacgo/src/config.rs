//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictacgo.toml";

/// Settings for a game session.
///
/// Player names left unset are asked for at startup.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct GameConfig {
    /// Name for player X.
    #[serde(default)]
    #[setters(strip_option)]
    player_x: Option<String>,

    /// Name for player O.
    #[serde(default)]
    #[setters(strip_option)]
    player_o: Option<String>,

    /// Symbol drawn for X's marks.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for O's marks.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,

    /// Whether the banner and prompts use terminal colors.
    #[serde(default = "default_styled")]
    styled: bool,
}

#[instrument]
fn default_x_symbol() -> String {
    "X".to_string()
}

#[instrument]
fn default_o_symbol() -> String {
    "O".to_string()
}

#[instrument]
fn default_styled() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
            styled: default_styled(),
        }
    }
}

impl GameConfig {
    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(styled = config.styled, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config at `path`, or the default path when none is given.
    ///
    /// A missing file at the default path yields the defaults; a missing
    /// file that was asked for explicitly is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Like [`GameConfig::load`], with the fallback location given.
    #[instrument]
    pub fn load_or_default(
        path: Option<&Path>,
        default_path: &Path,
    ) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_x: Option<&str>,
        player_o: Option<&str>,
        plain: bool,
    ) -> Self {
        if let Some(name) = player_x {
            info!(name, "Overriding player X name");
            self = self.with_player_x(name);
        }
        if let Some(name) = player_o {
            info!(name, "Overriding player O name");
            self = self.with_player_o(name);
        }
        if plain {
            self = self.with_styled(false);
        }
        self
    }

    /// Checks that the marker symbols can be told apart on the board.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_symbol.trim().is_empty() || self.o_symbol.trim().is_empty() {
            return Err(ConfigError::new("Marker symbols must not be blank"));
        }
        if self.x_symbol == self.o_symbol {
            return Err(ConfigError::new(format!(
                "Both players cannot use the symbol {:?}",
                self.x_symbol
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.x_symbol(), "X");
        assert!(*config.styled());
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml(
            r#"
            player_x = "Ada"
            o_symbol = "@"
            styled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.player_x().as_deref(), Some("Ada"));
        assert_eq!(config.player_o(), &None);
        assert_eq!(config.x_symbol(), "X");
        assert_eq!(config.o_symbol(), "@");
        assert!(!*config.styled());
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = GameConfig::from_toml(r#"x_symbol = "O""#).unwrap_err();
        assert!(err.message.contains("symbol"));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        assert!(GameConfig::from_toml(r#"x_symbol = " ""#).is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = GameConfig::from_toml("styled = maybe").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_player_o("Grace")
            .with_styled(false);
        assert_eq!(config.player_o().as_deref(), Some("Grace"));
        assert!(!*config.styled());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"player_o = "Grace""#).unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_o().as_deref(), Some("Grace"));
    }

    #[test]
    fn test_cli_values_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"player_x = "Ada""#).unwrap();
        writeln!(file, r#"player_o = "Grace""#).unwrap();

        let config = GameConfig::load(Some(file.path()))
            .unwrap()
            .with_overrides(Some("Bob"), None, true);
        assert_eq!(config.player_x().as_deref(), Some("Bob"));
        assert_eq!(config.player_o().as_deref(), Some("Grace"));
        assert!(!*config.styled());
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let config = GameConfig::from_toml(r#"player_x = "Ada""#)
            .unwrap()
            .with_overrides(None, None, false);
        assert_eq!(config.player_x().as_deref(), Some("Ada"));
        assert!(*config.styled());
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join(DEFAULT_CONFIG_PATH);
        let config = GameConfig::load_or_default(None, &default_path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_present_default_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&default_path, "styled = false\n").unwrap();
        let config = GameConfig::load_or_default(None, &default_path).unwrap();
        assert!(!*config.styled());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = GameConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
