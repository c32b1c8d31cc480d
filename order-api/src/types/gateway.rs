//! JSON helpers over the `lambda_http` request and response types

use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use super::AppError;

/// Reads a request body as a validated JSON payload
pub trait ValidatedJsonBody {
    /// Parses and validates the JSON body
    ///
    /// `lambda_http` has already decoded base64 bodies by the time this runs.
    ///
    /// # Errors
    ///
    /// Returns a validation `AppError` if the body is missing, is not valid JSON for
    /// `T`, or fails `T`'s validation rules
    fn validated_json<T>(&self) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate;
}

impl ValidatedJsonBody for Request {
    fn validated_json<T>(&self) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let body: &[u8] = self.body();
        if body.is_empty() {
            return Err(AppError::validation("Request body is required"));
        }

        let payload = serde_json::from_slice::<T>(body)
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

        payload
            .validate()
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

        Ok(payload)
    }
}

/// Serializes `body` as a JSON response with the given status
///
/// Falls back to a bare 500 response if `body` cannot be serialized.
#[must_use]
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    let (status, body) = match serde_json::to_string(body) {
        Ok(body) => (status, body),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Could not serialize response"}"#.to_string(),
            )
        }
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// Success body for create, update and delete
#[derive(Debug, Serialize)]
pub struct OrderConfirmation {
    /// Human-readable confirmation
    pub message: &'static str,
    /// Affected order
    #[serde(rename = "OrderId")]
    pub order_id: String,
}

/// Error body returned for every failure
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Failure description including the underlying cause
    pub error: String,
}
