//! `CreateOrder` Lambda handler

use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use order_storage::order::{Order, OrderStore};
use serde::Deserialize;
use validator::Validate;

use crate::types::{json_response, AppError, OrderConfirmation, ValidatedJsonBody};

/// Request to place a new coffee order
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// Customer placing the order
    #[validate(length(min = 1))]
    pub customer_name: String,
    /// Coffee blend ordered
    #[validate(length(min = 1))]
    pub coffee_blend: String,
}

/// Create a new coffee order
///
/// Generates a fresh order ID and writes the order with status `Pending`. The
/// write is unconditional.
///
/// # Returns
///
/// `200 OK` with `{ message, OrderId }`
///
/// # Errors
///
/// Returned as the response envelope:
/// - `400 BAD_REQUEST` - Missing or empty `customer_name` / `coffee_blend`
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn handler(order_store: &dyn OrderStore, request: &Request) -> Response<Body> {
    create_order(order_store, request)
        .await
        .unwrap_or_else(|err| err.context("Could not create order").into_response())
}

async fn create_order(
    order_store: &dyn OrderStore,
    request: &Request,
) -> Result<Response<Body>, AppError> {
    let payload: CreateOrderRequest = request.validated_json()?;
    let order = Order::new_pending(payload.customer_name, payload.coffee_blend);

    order_store.put(&order).await?;

    tracing::info!(
        order_id = %order.order_id,
        customer_name = %order.customer_name,
        "Order created"
    );

    Ok(json_response(
        StatusCode::OK,
        &OrderConfirmation {
            message: "Order created successfully!",
            order_id: order.order_id,
        },
    ))
}
