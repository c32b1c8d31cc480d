//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use thiserror::Error;
use tracing::Level;

/// Table name used in development when `COFFEE_ORDERS_TABLE` is not set
const DEFAULT_ORDERS_TABLE: &str = "CoffeeOrders";

/// Errors raised while reading process configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `APP_ENV` holds an unknown stage
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    /// A required variable is not set
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),
}

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Defaults to development when `APP_ENV` is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvironment` if `APP_ENV` holds an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment(env)),
        }
    }

    /// Returns the `DynamoDB` table holding coffee orders
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` in production and staging if
    /// `COFFEE_ORDERS_TABLE` is not set
    pub fn orders_table_name(&self) -> Result<String, ConfigError> {
        match self {
            Self::Production | Self::Staging => env::var("COFFEE_ORDERS_TABLE")
                .map_err(|_| ConfigError::MissingVariable("COFFEE_ORDERS_TABLE")),
            Self::Development => Ok(env::var("COFFEE_ORDERS_TABLE")
                .unwrap_or_else(|_| DEFAULT_ORDERS_TABLE.to_string())),
        }
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production | Self::Staging => None,
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// Default log level when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_log_level(&self) -> Level {
        match self {
            Self::Production | Self::Staging => Level::INFO,
            Self::Development => Level::DEBUG,
        }
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}
