//! Coffee Orders API Lambda handlers

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Cold-start wiring
pub mod bootstrap;

/// Lambda handlers
pub mod handlers;

/// Configuration, envelopes and errors
pub mod types;
