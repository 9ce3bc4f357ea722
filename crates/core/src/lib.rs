//! Copper Kettle Core - Shared domain types.
//!
//! This crate provides the common types used across all Copper Kettle
//! components:
//! - `storefront` - Public café site (menu, cart, checkout)
//! - `admin` - Staff console (menu management, analytics, barista board)
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. The `postgres` feature adds sqlx trait impls for the newtypes so
//! the binaries can bind them in queries directly.
//!
//! # Modules
//!
//! - [`types`] - IDs, money, order statuses, staff roles, the session cart,
//!   and order lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
