// order_service/src/models/mod.rs

//! Contains data structures representing database entities.

pub mod order;

pub use order::{NewOrder, Order, OrderView};
