// order_service/src/store/mod.rs

//! Storage collaborator for orders.
//!
//! Handlers talk to an [`OrderStore`] and never to a driver directly, so the
//! MongoDB backend can be swapped for the in-memory one in tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{NewOrder, Order};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryOrderStore;
pub use mongo::MongoOrderStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("Database error: {0}")]
  Driver(#[from] mongodb::error::Error),

  /// The backend answered, but not with what was expected.
  #[error("Backend error: {0}")]
  Backend(String),
}

/// Single-document operations on the order collection.
///
/// Each call is atomic on its own; nothing groups two calls into a
/// transaction.
#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Persists a new order and returns the identifier the store assigned.
  async fn insert(&self, order: NewOrder) -> Result<ObjectId, StorageError>;

  async fn find_by_id(&self, id: ObjectId) -> Result<Option<Order>, StorageError>;

  /// Sets `status` on the order and returns how many documents were modified.
  /// Writing the value already stored modifies nothing.
  async fn update_status(&self, id: ObjectId, status: &str) -> Result<u64, StorageError>;
}
