use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Word-frequency table (CSV "word,count", optionally gzip'ed).
    /// Falls back to the embedded bootstrap table when unset.
    pub frequency_file: Option<PathBuf>,

    /// Compiled fst dictionary. Falls back to the embedded wordlist when unset.
    pub dictionary_file: Option<PathBuf>,

    #[serde(default = "default_min_frequency")]
    pub min_frequency: f64,

    #[serde(default = "default_max_identifier_length")]
    pub max_identifier_length: usize,
}

fn default_min_frequency() -> f64 {
    30.0
}

fn default_max_identifier_length() -> usize {
    512
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequency_file: None,
            dictionary_file: None,
            min_frequency: default_min_frequency(),
            max_identifier_length: default_max_identifier_length(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        frequency_file: Option<PathBuf>,
        dictionary_file: Option<PathBuf>,
        min_frequency: Option<f64>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".idsplit.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(path) = frequency_file {
            config.frequency_file = Some(path);
        }
        if let Some(path) = dictionary_file {
            config.dictionary_file = Some(path);
        }
        if let Some(min) = min_frequency {
            config.min_frequency = min;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.frequency_file.is_some() {
            self.frequency_file = other.frequency_file;
        }
        if other.dictionary_file.is_some() {
            self.dictionary_file = other.dictionary_file;
        }
        if other.min_frequency != default_min_frequency() {
            self.min_frequency = other.min_frequency;
        }
        if other.max_identifier_length != default_max_identifier_length() {
            self.max_identifier_length = other.max_identifier_length;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "idsplit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.frequency_file.is_none());
        assert_eq!(config.min_frequency, 30.0);
        assert_eq!(config.max_identifier_length, 512);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            frequency_file: Some(PathBuf::from("model.csv.gz")),
            min_frequency: 50.0,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.frequency_file, Some(PathBuf::from("model.csv.gz")));
        assert_eq!(merged.min_frequency, 50.0);
        assert_eq!(merged.max_identifier_length, 512);
    }
}
