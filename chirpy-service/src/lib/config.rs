use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub platform: Platform,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_seconds: i64,
}

impl JwtConfig {
    /// Largest lifetime a `chrono::Duration` can hold in whole seconds.
    pub const MAX_EXPIRATION_SECONDS: i64 = i64::MAX / 1000;

    /// Reject lifetimes that are non-positive or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=Self::MAX_EXPIRATION_SECONDS).contains(&self.expiration_seconds) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_seconds must be between 1 and {}, got {}",
                Self::MAX_EXPIRATION_SECONDS,
                self.expiration_seconds
            )));
        }

        Ok(())
    }

    /// Lifetime of a newly issued token.
    ///
    /// A positive `requested_seconds` is honoured up to `expiration_seconds`;
    /// anything else falls back to `expiration_seconds`.
    pub fn token_ttl(&self, requested_seconds: Option<i64>) -> Duration {
        let seconds = match requested_seconds {
            Some(requested) if requested > 0 => requested.min(self.expiration_seconds),
            _ => self.expiration_seconds,
        };
        Duration::try_seconds(seconds).unwrap_or(Duration::MAX)
    }
}

// Keeps the signing secret out of logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}

/// Deployment platform. Destructive admin endpoints only run on `dev`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Dev,
    #[default]
    Prod,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, PLATFORM, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.jwt.validate()?;

        Ok(config)
    }
}
