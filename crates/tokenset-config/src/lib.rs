use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokenset_intervals::{IntervalSet, RenderMode, Vocabulary};

/// Failure to load a render config from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read render config at {config_path}: {source}")]
    Unreadable {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid render config at {config_path}: {source}")]
    Malformed {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Which renderer diagnostics use for token sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    #[default]
    Index,
    Char,
    Named,
}

/// Rendering configuration, usually shipped next to a generated grammar.
///
/// ```toml
/// render = "named"
///
/// [vocabulary]
/// literal_names = ["", "'+'"]
/// symbolic_names = ["", "PLUS"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderStyle,
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

impl Config {
    /// Loads the config at `config_path`, returning `Ok(None)` if it doesn't exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::Unreadable {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Malformed {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "Loaded config from {} (render = {:?})",
            config_path.display(),
            config.render
        );
        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// The render mode this config selects.
    ///
    /// Named rendering uses the configured vocabulary, which must name every
    /// token type that will be rendered.
    pub fn render_mode(&self) -> RenderMode<'_> {
        match self.render {
            RenderStyle::Index => RenderMode::Index,
            RenderStyle::Char => RenderMode::Char,
            RenderStyle::Named => self.vocabulary.render_mode(),
        }
    }

    /// Renders `set` with [`Config::render_mode`].
    pub fn render(&self, set: &IntervalSet) -> String {
        set.render(self.render_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_set() -> IntervalSet {
        let mut set = IntervalSet::new();
        set.add_range(1, 3).unwrap();
        set
    }

    #[test]
    fn test_defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render_mode(), RenderMode::Index);
    }

    #[test]
    fn test_parse_named_config() {
        let config_content = r#"
render = "named"

[vocabulary]
literal_names = ["", "'+'"]
symbolic_names = ["", "PLUS", "ID"]
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.render, RenderStyle::Named);
        assert_eq!(config.vocabulary.literal_names, names(&["", "'+'"]));
        assert!(config.vocabulary.display_names.is_empty());
        assert_eq!(config.render(&sample_set()), "{'+', ID}");
    }

    #[test]
    fn test_char_and_index_styles() {
        let mut config = Config {
            render: RenderStyle::Char,
            ..Config::default()
        };
        let mut set = IntervalSet::new();
        set.add_range('a' as isize, 'd' as isize).unwrap();

        assert_eq!(config.render(&set), "'a'..'d'");
        config.render = RenderStyle::Index;
        assert_eq!(config.render(&set), "97..100");
    }

    #[test]
    fn test_unknown_render_style_is_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"render = "fancy""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            render: RenderStyle::Named,
            vocabulary: Vocabulary::new(names(&["", "'+'"]), names(&["", "PLUS"]), Vec::new()),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("tokenset.toml");
        std::fs::write(&config_file, "render = [").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(err.to_string().contains("tokenset.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("tokenset.toml");
        let test_config = Config {
            render: RenderStyle::Char,
            vocabulary: Vocabulary::from_token_names(&names(&["<INVALID>", "'a'", "B"])),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
