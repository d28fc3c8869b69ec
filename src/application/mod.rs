//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `CheckoutService`, the primary entry point for
//! placing orders and creating payment intents, and the `CatalogService`
//! for read-side catalog queries.

pub mod catalog;
pub mod checkout;
