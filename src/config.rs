// src/config.rs
use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::{PracticeError, Result};
use crate::language::Language;

pub const DEFAULT_EXECUTION_URL: &str =
    "https://w0vs1neuw0.execute-api.us-west-2.amazonaws.com/api/submit-code";

/// Settings a new practice session starts with.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionDefaults {
    pub min_value: i64,
    pub max_value: i64,
    pub list_length: usize,
    pub language: Language,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            min_value: -100,
            max_value: 100,
            list_length: 10,
            language: Language::Java,
        }
    }
}

/// High-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub execution_url: String,
    pub host: String,
    pub port: u16,
    pub max_list_length: usize,
    /// Sessions untouched for longer than this are dropped.
    pub session_idle_secs: u64,
    pub defaults: SessionDefaults,
}

/// Shape of the optional TOML config file. Every key may be omitted.
#[derive(Deserialize, Debug, Default)]
struct FileConfig {
    execution_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    max_list_length: Option<usize>,
    session_idle_secs: Option<u64>,
    defaults: Option<SessionDefaults>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            execution_url: DEFAULT_EXECUTION_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_list_length: 100,
            session_idle_secs: 30 * 60,
            defaults: SessionDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional config file, then environment variables.
    pub fn load() -> Result<Self> {
        let mut config = match config_file_path() {
            Some(path) if path.exists() => {
                log::info!("Loading config file {}", path.display());
                let contents = std::fs::read_to_string(&path)?;
                Self::from_toml_str(&contents)?
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document on top of the built-in defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents)?;
        let mut config = Self::default();
        if let Some(url) = file.execution_url {
            config.execution_url = url;
        }
        if let Some(host) = file.host {
            config.host = host;
        }
        if let Some(port) = file.port {
            config.port = port;
        }
        if let Some(max) = file.max_list_length {
            config.max_list_length = max;
        }
        if let Some(secs) = file.session_idle_secs {
            config.session_idle_secs = secs;
        }
        if let Some(defaults) = file.defaults {
            config.defaults = defaults;
        }
        Ok(config)
    }

    /// Override fields from `EXECUTION_URL`, `HOST`, `PORT`, `MAX_LIST_LENGTH`
    /// and `SESSION_IDLE_SECS`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("EXECUTION_URL") {
            self.execution_url = url.trim().to_string();
        }
        if let Some(host) = lookup("HOST") {
            self.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| PracticeError::Config(format!("PORT is not a valid port: {}", port)))?;
        }
        if let Some(max) = lookup("MAX_LIST_LENGTH") {
            self.max_list_length = max.trim().parse().map_err(|_| {
                PracticeError::Config(format!("MAX_LIST_LENGTH is not a number: {}", max))
            })?;
        }
        if let Some(secs) = lookup("SESSION_IDLE_SECS") {
            self.session_idle_secs = secs.trim().parse().map_err(|_| {
                PracticeError::Config(format!("SESSION_IDLE_SECS is not a number: {}", secs))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.execution_url.is_empty() {
            return Err(PracticeError::Config("execution_url must not be empty".to_string()));
        }
        if self.max_list_length == 0 {
            return Err(PracticeError::Config("max_list_length must be at least 1".to_string()));
        }
        if self.session_idle_secs == 0 {
            return Err(PracticeError::Config("session_idle_secs must be at least 1".to_string()));
        }
        let d = &self.defaults;
        if d.min_value >= d.max_value {
            return Err(PracticeError::Config(format!(
                "default min_value {} must be less than max_value {}",
                d.min_value, d.max_value
            )));
        }
        if d.list_length == 0 || d.list_length > self.max_list_length {
            return Err(PracticeError::Config(format!(
                "default list_length {} must be between 1 and {}",
                d.list_length, self.max_list_length
            )));
        }
        Ok(())
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SORT_PRACTICE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("sort-practice").join("config.toml"))
}
