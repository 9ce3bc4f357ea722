//! Core types for Copper Kettle.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod status;

pub use cart::Cart;
pub use id::*;
pub use order::OrderLine;
pub use price::Price;
pub use status::{OrderStatus, StaffRole};
