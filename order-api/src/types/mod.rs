mod environment;
mod error;
mod gateway;

pub use environment::{ConfigError, Environment};
pub use error::{AppError, ErrorKind};
pub use gateway::{json_response, ErrorBody, OrderConfirmation, ValidatedJsonBody};
