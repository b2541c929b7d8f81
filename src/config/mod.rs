use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_page_size() -> usize {
    20
}
fn default_simulated_delay_ms() -> u64 {
    1000
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            simulated_delay_ms: default_simulated_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.hrdash`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hrdash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hrdash.conf")
    }

    /// Return the full path of the SQLite database backing local storage
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hrdash.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Serialize the configuration as YAML
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file, creating its directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), self.to_yaml()?)?;
        Ok(())
    }

    /// Update one field from its textual form, as given to `config --set`.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let value = value.trim();
        let invalid = |what: &str| AppError::Config(format!("{key}: '{value}' is not {what}"));

        match key.trim() {
            "database" => self.database = Self::resolve_db_path(value).to_string_lossy().to_string(),
            "api_base_url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(invalid("an http(s) URL"));
                }
                self.api_base_url = value.trim_end_matches('/').to_string();
            }
            "page_size" => {
                self.page_size = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| invalid("a positive number"))?;
            }
            "simulated_delay_ms" => {
                self.simulated_delay_ms = value.parse().map_err(|_| invalid("a number"))?;
            }
            "log_level" => {
                if !LOG_LEVELS.contains(&value.to_lowercase().as_str()) {
                    return Err(invalid("a log level (trace, debug, info, warn, error)"));
                }
                self.log_level = value.to_lowercase();
            }
            other => return Err(AppError::Config(format!("unknown key '{other}'"))),
        }
        Ok(())
    }

    /// Where a user-supplied database path points: `~/` is expanded,
    /// other relative paths live under the config directory.
    pub fn resolve_db_path(custom: &str) -> PathBuf {
        let path = expand_tilde(custom);
        if path.is_absolute() {
            path
        } else {
            Self::config_dir().join(path)
        }
    }

    /// Initialize configuration directory and file.
    /// Returns the configuration that was (or would have been) written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
