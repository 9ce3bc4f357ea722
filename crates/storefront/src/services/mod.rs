//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `checkout` - Converts the session cart into a persisted order

pub mod checkout;

pub use checkout::{CheckoutError, CheckoutService, Receipt};
