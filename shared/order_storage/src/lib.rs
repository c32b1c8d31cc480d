//! Order storage for the Coffee Orders API
//!
//! This crate owns the `DynamoDB` table holding coffee orders and exposes it
//! through the [`order::OrderStore`] trait so handlers can be exercised
//! against an in-memory store in tests.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]

pub mod order;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
