//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_MIN_JUDGES_REQUIRED, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SCORE_MAX, DEFAULT_SCORE_MIN, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub scoring: ScoringConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
    pub request_timeout_secs: u64,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Identity token configuration.
///
/// Tokens are minted by the sign-in collaborator with a shared HS256 secret;
/// this service only verifies them.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub token_secret: String,
    /// Email that is granted the admin role on first sign-in
    pub bootstrap_admin_email: Option<String>,
}

/// Score bounds and judging defaults
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub score_min: f64,
    pub score_max: f64,
    pub default_min_judges_required: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            scoring: ScoringConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS".to_string()))?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token_secret: env::var("AUTH_TOKEN_SECRET")
                .map_err(|_| ConfigError::Missing("AUTH_TOKEN_SECRET".to_string()))?,
            bootstrap_admin_email: env::var("BOOTSTRAP_ADMIN_EMAIL")
                .ok()
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty()),
        })
    }
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let score_min: f64 = env::var("SCORE_MIN")
            .unwrap_or_else(|_| DEFAULT_SCORE_MIN.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SCORE_MIN".to_string()))?;
        let score_max: f64 = env::var("SCORE_MAX")
            .unwrap_or_else(|_| DEFAULT_SCORE_MAX.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SCORE_MAX".to_string()))?;
        let default_min_judges_required: i32 = env::var("DEFAULT_MIN_JUDGES_REQUIRED")
            .unwrap_or_else(|_| DEFAULT_MIN_JUDGES_REQUIRED.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DEFAULT_MIN_JUDGES_REQUIRED".to_string()))?;

        let scoring = Self {
            score_min,
            score_max,
            default_min_judges_required,
        };
        scoring.validate()?;
        Ok(scoring)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.score_min.is_finite() || !self.score_max.is_finite() || self.score_min >= self.score_max
        {
            return Err(ConfigError::InvalidValue("SCORE_MIN/SCORE_MAX".to_string()));
        }
        if self.default_min_judges_required < 1 {
            return Err(ConfigError::InvalidValue(
                "DEFAULT_MIN_JUDGES_REQUIRED".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that a score lies within the configured bounds
    pub fn contains(&self, score: f64) -> bool {
        score.is_finite() && score >= self.score_min && score <= self.score_max
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_min: DEFAULT_SCORE_MIN,
            score_max: DEFAULT_SCORE_MAX,
            default_min_judges_required: DEFAULT_MIN_JUDGES_REQUIRED,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
            log_json: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        let scoring = ScoringConfig::default();
        assert!(scoring.contains(0.0));
        assert!(scoring.contains(10.0));
        assert!(scoring.contains(7.5));
        assert!(!scoring.contains(-0.1));
        assert!(!scoring.contains(10.5));
        assert!(!scoring.contains(f64::NAN));
        assert!(!scoring.contains(f64::INFINITY));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let scoring = ScoringConfig {
            score_min: 10.0,
            score_max: 1.0,
            default_min_judges_required: 2,
        };
        assert!(scoring.validate().is_err());

        let scoring = ScoringConfig {
            default_min_judges_required: 0,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());
    }
}
