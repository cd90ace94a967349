// src/config.rs

use std::{env, fmt, str::FromStr};

use dotenvy::dotenv;

use crate::quiz::timer::DEFAULT_DURATION_SECS;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absent means results live in process memory only.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub log_dir: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub questions_path: String,
    pub test_duration_secs: u32,
    pub session_retention_secs: u64,
    pub bind_address: String,
    pub allowed_origins: Vec<String>,
    pub static_dir: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let test_duration_secs: u32 = parse_or("TEST_DURATION_SECS", DEFAULT_DURATION_SECS)?;
        if test_duration_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "TEST_DURATION_SECS",
                value: "0".to_string(),
            });
        }

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url: optional("DATABASE_URL"),
            jwt_secret,
            jwt_expiration: parse_or("JWT_EXPIRATION", 3600)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
            questions_path: env::var("QUESTIONS_PATH")
                .unwrap_or_else(|_| "questions.json".to_string()),
            test_duration_secs,
            session_retention_secs: parse_or("SESSION_RETENTION_SECS", 3600)?,
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            allowed_origins,
            static_dir: optional("STATIC_DIR"),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}
