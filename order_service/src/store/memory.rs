// order_service/src/store/memory.rs

//! In-memory order store. No persistence across restarts; used by the test
//! suite and for running the service without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{OrderStore, StorageError};
use crate::models::{NewOrder, Order};

#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
  orders: RwLock<HashMap<ObjectId, Order>>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn len(&self) -> usize {
    self.orders.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.orders.read().await.is_empty()
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn insert(&self, order: NewOrder) -> Result<ObjectId, StorageError> {
    let id = ObjectId::new();
    self.orders.write().await.insert(id, order.with_id(id));
    Ok(id)
  }

  async fn find_by_id(&self, id: ObjectId) -> Result<Option<Order>, StorageError> {
    Ok(self.orders.read().await.get(&id).cloned())
  }

  async fn update_status(&self, id: ObjectId, status: &str) -> Result<u64, StorageError> {
    let mut orders = self.orders.write().await;
    match orders.get_mut(&id) {
      Some(order) if order.status != status => {
        order.status = status.to_string();
        Ok(1)
      }
      _ => Ok(0),
    }
  }
}
