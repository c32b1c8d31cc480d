//! `ListOrders` Lambda handler

use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use order_storage::order::OrderStore;

use crate::types::{json_response, AppError};

/// List every coffee order
///
/// Returns the stored records of a single scan as-is, whatever attributes they
/// carry; results beyond the first page of the scan are not returned.
pub async fn handler(order_store: &dyn OrderStore) -> Response<Body> {
    match order_store.scan().await {
        Ok(orders) => {
            tracing::info!(count = orders.len(), "Orders listed");
            json_response(StatusCode::OK, &orders)
        }
        Err(err) => AppError::from(err)
            .context("Could not retrieve orders")
            .into_response(),
    }
}
