//! `DeleteOrder` Lambda handler

use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use order_storage::order::{OrderKey, OrderStore};
use serde::Deserialize;
use validator::Validate;

use crate::types::{json_response, AppError, OrderConfirmation, ValidatedJsonBody};

/// Request to delete an order
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteOrderRequest {
    /// Order to delete
    #[validate(length(min = 1))]
    pub order_id: String,
    /// Customer that placed the order
    #[validate(length(min = 1))]
    pub customer_name: String,
}

/// Delete an order
///
/// Deleting an order that does not exist succeeds like any other delete.
///
/// # Returns
///
/// `200 OK` with `{ message, OrderId }`
///
/// # Errors
///
/// Returned as the response envelope:
/// - `400 BAD_REQUEST` - Missing or empty field
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn handler(order_store: &dyn OrderStore, request: &Request) -> Response<Body> {
    delete_order(order_store, request)
        .await
        .unwrap_or_else(|err| err.context("Could not delete order").into_response())
}

async fn delete_order(
    order_store: &dyn OrderStore,
    request: &Request,
) -> Result<Response<Body>, AppError> {
    let payload: DeleteOrderRequest = request.validated_json()?;
    let key = OrderKey::new(payload.order_id, payload.customer_name);

    order_store.delete(&key).await?;

    tracing::info!(
        order_id = %key.order_id,
        customer_name = %key.customer_name,
        "Order deleted"
    );

    Ok(json_response(
        StatusCode::OK,
        &OrderConfirmation {
            message: "Order deleted successfully!",
            order_id: key.order_id,
        },
    ))
}
