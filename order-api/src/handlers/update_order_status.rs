//! `UpdateOrderStatus` Lambda handler

use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use order_storage::order::{OrderKey, OrderStore};
use serde::Deserialize;
use validator::Validate;

use crate::types::{json_response, AppError, OrderConfirmation, ValidatedJsonBody};

/// Request to change the status of an order
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    /// Order to update
    #[validate(length(min = 1))]
    pub order_id: String,
    /// Customer that placed the order
    #[validate(length(min = 1))]
    pub customer_name: String,
    /// Replacement status, free-form
    #[validate(length(min = 1))]
    pub new_status: String,
}

/// Update the status of an existing order
///
/// Only `OrderStatus` is changed; any non-empty status string is accepted.
///
/// # Returns
///
/// `200 OK` with `{ message, OrderId }`
///
/// # Errors
///
/// Returned as the response envelope:
/// - `400 BAD_REQUEST` - Missing or empty field
/// - `404 NOT_FOUND` - No order with the given `order_id` and `customer_name`
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn handler(order_store: &dyn OrderStore, request: &Request) -> Response<Body> {
    update_order_status(order_store, request)
        .await
        .unwrap_or_else(|err| err.context("Could not update order").into_response())
}

async fn update_order_status(
    order_store: &dyn OrderStore,
    request: &Request,
) -> Result<Response<Body>, AppError> {
    let payload: UpdateOrderStatusRequest = request.validated_json()?;
    let key = OrderKey::new(payload.order_id, payload.customer_name);

    order_store.update_status(&key, &payload.new_status).await?;

    tracing::info!(
        order_id = %key.order_id,
        customer_name = %key.customer_name,
        new_status = %payload.new_status,
        "Order status updated"
    );

    Ok(json_response(
        StatusCode::OK,
        &OrderConfirmation {
            message: "Order status updated successfully!",
            order_id: key.order_id,
        },
    ))
}
