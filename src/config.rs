use crate::core::types::Pos;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tuning constants and data locations for the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Two words sharing this many leading characters are similar.
    pub prefix_len: usize,

    /// Fuzzy score (0..=100) above which two words are similar.
    pub fuzzy_threshold: u8,

    /// Upper bound on synsets fed into the Cartesian product.
    pub max_synsets: usize,

    pub default_lang: String,
    pub default_pos: Pos,

    /// Word pool document (language -> pos -> words).
    pub words_path: PathBuf,

    /// Synset corpus: a JSON synset document or a binary snapshot.
    pub synsets_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prefix_len: 5,
            fuzzy_threshold: 80,
            max_synsets: 6,
            default_lang: "eng".to_string(),
            default_pos: Pos::Noun,
            words_path: PathBuf::from("data/all_words.json"),
            synsets_path: PathBuf::from("data/synsets.json"),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, the defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix_len == 0 {
            return Err(GameError::config("prefix_len must be > 0"));
        }
        if self.fuzzy_threshold > 100 {
            return Err(GameError::config(format!(
                "fuzzy_threshold ({}) cannot exceed 100",
                self.fuzzy_threshold
            )));
        }
        if self.max_synsets == 0 {
            return Err(GameError::config("max_synsets must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fuzzy_threshold = 90\ndefault_pos = \"v\"").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.fuzzy_threshold, 90);
        assert_eq!(config.default_pos, Pos::Verb);
        assert_eq!(config.prefix_len, 5);
        assert_eq!(config.max_synsets, 6);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = GameConfig {
            fuzzy_threshold: 120,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::Config(_))));

        let config = GameConfig {
            max_synsets: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
