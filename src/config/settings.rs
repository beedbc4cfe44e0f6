//! Configuration settings for the N-Queens game

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub game: GameConfig,
    pub animation: AnimationConfig,
    pub persistence: PersistenceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Queen glide duration in milliseconds
    pub transition_ms: u64,
    /// Invalid-move warning display duration in milliseconds
    pub warning_ms: u64,
    /// Host tick interval in milliseconds
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    pub high_score_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig { board_size: 8 },
            animation: AnimationConfig {
                transition_ms: 500,
                warning_ms: 2000,
                tick_ms: 16,
            },
            persistence: PersistenceConfig {
                high_score_file: PathBuf::from("highscore.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.game.board_size == 0 {
            anyhow::bail!("Board size must be at least 1");
        }

        if self.animation.transition_ms == 0 {
            anyhow::bail!("Transition duration must be positive");
        }

        if self.animation.warning_ms == 0 {
            anyhow::bail!("Warning duration must be positive");
        }

        if self.animation.tick_ms == 0 {
            anyhow::bail!("Tick interval must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(board_size) = cli_overrides.board_size {
            self.game.board_size = board_size;
        }
        if let Some(ref high_score_file) = cli_overrides.high_score_file {
            self.persistence.high_score_file = high_score_file.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_size: Option<usize>,
    pub high_score_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_reference_constants() {
        let settings = Settings::default();
        assert_eq!(settings.game.board_size, 8);
        assert_eq!(settings.animation.transition_ms, 500);
        assert_eq!(settings.animation.warning_ms, 2000);
        assert_eq!(settings.animation.tick_ms, 16);
        assert_eq!(settings.persistence.high_score_file, PathBuf::from("highscore.txt"));
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.game.board_size = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.animation.transition_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.animation.tick_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.game.board_size = 10;
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.game.board_size, 10);
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(loaded.animation.transition_ms, 500);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(&path, "game: [not, a, mapping]").unwrap();

        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            board_size: Some(6),
            high_score_file: Some(PathBuf::from("scores/best.txt")),
            format: Some(OutputFormat::Json),
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.game.board_size, 6);
        assert_eq!(settings.persistence.high_score_file, PathBuf::from("scores/best.txt"));
        assert_eq!(settings.output.format, OutputFormat::Json);

        // Empty overrides change nothing
        settings.merge_with_cli(&CliOverrides::default());
        assert_eq!(settings.game.board_size, 6);
    }
}
