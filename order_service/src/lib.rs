// order_service/src/lib.rs

//! HTTP service for creating food-delivery orders and updating their status,
//! backed by a MongoDB `order` collection.

pub mod config;
pub mod errors;
pub mod ids;
pub mod models;
pub mod state;
pub mod store;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
pub use store::{InMemoryOrderStore, MongoOrderStore, OrderStore, StorageError};
