//! Cold-start wiring shared by every Lambda binary

use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use order_storage::order::{OrderStorage, OrderStore};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

use crate::types::Environment;

/// Configures logging for the environment
///
/// Uses JSON format for staging/production, regular format for development.
/// `RUST_LOG` overrides the environment's default level.
pub fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.default_log_level()).into())
        .from_env_lossy();

    let result = if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .without_time()
            .try_init()
    } else {
        fmt().with_env_filter(env_filter).try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {e}");
    }
}

/// Reads configuration, installs logging and builds the `DynamoDB` backed order store
///
/// # Errors
///
/// Returns an error if `APP_ENV` is invalid or the orders table is not configured
pub async fn init() -> anyhow::Result<Arc<dyn OrderStore>> {
    let environment = Environment::from_env()?;
    init_tracing(environment);

    let table_name = environment.orders_table_name()?;
    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));

    tracing::info!(table = %table_name, environment = ?environment, "Order store initialized");

    Ok(Arc::new(OrderStorage::new(dynamodb_client, table_name)))
}
