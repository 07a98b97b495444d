// src/config.rs
use crate::errors::{AppError, AppResult};
use crate::domain::model::DEFAULT_CONCERT_ID;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_ORDER_PATH: &str = "/api/ticketHub";

/// Ticket hub client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Purchasing API location
    pub api: ApiConfig,

    /// Form configuration
    pub form: FormConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Purchasing API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL (e.g., "https://tickets.example.com")
    pub base_url: String,

    /// Path of the order endpoint, appended to the base URL
    pub order_path: String,
}

/// Form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Concert every order is placed for
    pub concert_id: i64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("API_BASE_URL")
            .or_else(|| lookup("VITE_API_URL"))
            .ok_or_else(|| {
                AppError::Config("Missing API_BASE_URL environment variable".to_string())
            })?;

        let api_config = ApiConfig {
            base_url,
            order_path: lookup("TICKET_HUB_PATH").unwrap_or_else(|| DEFAULT_ORDER_PATH.to_string()),
        };

        let concert_id = match lookup("CONCERT_ID") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                AppError::Config(format!("Invalid CONCERT_ID {:?}: {}", raw, e))
            })?,
            None => DEFAULT_CONCERT_ID,
        };

        let logging_config = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            to_file: lookup("LOG_TO_FILE")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: lookup("LOG_FILE_PATH"),
        };

        let config = Config {
            api: api_config,
            form: FormConfig { concert_id },
            logging: logging_config,
        };
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path).map_err(|e| {
            AppError::Config(format!("Failed to open config file: {}", e))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::Config(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, contents).map_err(|e| {
            AppError::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::Config("API base URL must not be empty".to_string()));
        }
        Ok(())
    }

    /// Full URL orders are posted to
    pub fn order_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.order_path
        )
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        // Set log level
        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        // Configure output
        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path).map_err(|e| {
                    AppError::Config(format!("Failed to create log file: {}", e))
                })?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        // Initialize the logger
        builder.try_init().map_err(|e| {
            AppError::Config(format!("Failed to initialize logger: {}", e))
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:7071".to_string(),
                order_path: DEFAULT_ORDER_PATH.to_string(),
            },
            form: FormConfig {
                concert_id: DEFAULT_CONCERT_ID,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_base_url_and_defaults() {
        let config = Config::from_lookup(lookup(&[("API_BASE_URL", "https://tickets.example.com")])).unwrap();

        assert_eq!(config.api.base_url, "https://tickets.example.com");
        assert_eq!(config.form.concert_id, DEFAULT_CONCERT_ID);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.to_file);
        assert_eq!(config.order_endpoint(), "https://tickets.example.com/api/ticketHub");
    }

    #[test]
    fn falls_back_to_vite_variable() {
        let config = Config::from_lookup(lookup(&[("VITE_API_URL", "http://localhost:7071")])).unwrap();

        assert_eq!(config.order_endpoint(), "http://localhost:7071/api/ticketHub");
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let config = Config::from_lookup(lookup(&[("API_BASE_URL", "https://tickets.example.com/")])).unwrap();

        assert_eq!(config.order_endpoint(), "https://tickets.example.com/api/ticketHub");
    }

    #[test]
    fn overrides_concert_and_logging() {
        let config = Config::from_lookup(lookup(&[
            ("API_BASE_URL", "https://tickets.example.com"),
            ("CONCERT_ID", "42"),
            ("LOG_LEVEL", "debug"),
            ("LOG_TO_FILE", "true"),
            ("LOG_FILE_PATH", "/tmp/ticket_hub.log"),
        ]))
        .unwrap();

        assert_eq!(config.form.concert_id, 42);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.to_file);
        assert_eq!(config.logging.file_path.as_deref(), Some("/tmp/ticket_hub.log"));
    }

    #[test]
    fn missing_or_empty_base_url_is_an_error() {
        assert!(matches!(Config::from_lookup(lookup(&[])), Err(AppError::Config(_))));
        assert!(matches!(
            Config::from_lookup(lookup(&[("API_BASE_URL", "  ")])),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn bad_concert_id_is_an_error() {
        let result = Config::from_lookup(lookup(&[
            ("API_BASE_URL", "https://tickets.example.com"),
            ("CONCERT_ID", "BLACKPINK"),
        ]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn file_round_trip() {
        let path = env::temp_dir().join(format!("ticket_hub_config_{}.json", std::process::id()));
        let config = Config::default();

        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
