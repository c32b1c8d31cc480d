//! Error types for order storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, put_item::PutItemError, scan::ScanError,
    update_item::UpdateItemError,
};
use thiserror::Error;

/// Result type alias for order storage operations
pub type OrderStorageResult<T> = Result<T, OrderStorageError>;

/// Storage error types for order operations
#[derive(Debug, Error)]
pub enum OrderStorageError {
    /// Failed to insert order into `DynamoDB`
    #[error("Failed to insert order into DynamoDB: {0}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to scan orders from `DynamoDB`
    #[error("Failed to scan orders from DynamoDB: {0}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to update order in `DynamoDB`
    #[error("Failed to update order in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// Failed to delete order from `DynamoDB`
    #[error("Failed to delete order from DynamoDB: {0}")]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// No order exists for the given composite key
    #[error("Order not found: {order_id} ({customer_name})")]
    OrderNotFound {
        /// Order ID that was addressed
        order_id: String,
        /// Customer name that was addressed
        customer_name: String,
    },

    /// Failed to convert an order to or from a `DynamoDB` item
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Store rejected the request; only raised by the test doubles in `mock`
    #[cfg(any(test, feature = "test-utils"))]
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_dynamo::Error> for OrderStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
