//! One module per Lambda function
//!
//! Every handler performs exactly one order store operation and always returns a
//! response envelope; failures are encoded as status codes rather than Lambda
//! errors.

pub mod create_order;
pub mod delete_order;
pub mod list_orders;
pub mod update_order_status;
