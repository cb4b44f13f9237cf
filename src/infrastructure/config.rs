//! Configuration management

use crate::domain::AnalysisConfig;
use crate::error::{RemindError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "remind.toml";

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "REMIND_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub journal_dir: PathBuf,
    pub days_back: u32,
    pub custom_stopwords: Vec<String>,
    pub ollama: OllamaConfig,
}

/// Settings for the local text-analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub enabled: bool,
    pub url: String,
    pub sentiment_model: String,
    pub insight_model: String,
    pub sentiment_timeout_secs: u64,
    pub insight_timeout_secs: u64,
    pub sentiment_temperature: f64,
    pub insight_temperature: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: Self::default_journal_dir(),
            days_back: 7,
            custom_stopwords: Vec::new(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        OllamaConfig {
            enabled: true,
            url: "http://localhost:11434".to_string(),
            sentiment_model: "phi4".to_string(),
            insight_model: "llama3".to_string(),
            sentiment_timeout_secs: 30,
            insight_timeout_secs: 60,
            sentiment_temperature: 0.5,
            insight_temperature: 0.7,
        }
    }
}

impl Config {
    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Otherwise the first of
    /// [`Config::candidate_paths`] that exists is used, falling back to
    /// defaults. `REMIND_*` environment variables are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::candidate_paths().into_iter().find(|p| p.is_file()) {
                Some(path) => Self::load_from_file(&path)?,
                None => Config::default(),
            },
        };

        config.apply_env(std::env::vars())?;
        Ok(config)
    }

    /// Config files in order of precedence
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("remind").join("config.toml"));
        }
        paths
    }

    /// Load a TOML config file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RemindError::Config(format!("Config file not found: {}", path.display()))
            } else {
                RemindError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            RemindError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write this config as TOML, refusing to clobber an existing file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(RemindError::Config(format!(
                "Config file already exists: {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RemindError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Apply `REMIND_*` overrides from the given variables
    pub fn apply_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            match name.to_lowercase().as_str() {
                "journal_dir" => self.journal_dir = PathBuf::from(value),
                "days_back" => {
                    self.days_back = value.trim().parse().map_err(|_| {
                        RemindError::Config(format!("Invalid days_back: '{}'", value))
                    })?;
                }
                "custom_stopwords" => {
                    self.custom_stopwords = value
                        .split(',')
                        .map(|w| w.trim().to_string())
                        .filter(|w| !w.is_empty())
                        .collect();
                }
                "ollama_url" => self.ollama.url = value,
                _ => {}
            }
        }

        Ok(())
    }

    /// Stopword settings for the analysis pass
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::with_custom_stopwords(&self.custom_stopwords)
    }

    fn default_journal_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join("Documents")
            .join("Journal")
    }
}
