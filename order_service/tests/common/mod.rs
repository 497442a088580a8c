// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use actix_web::web;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use order_service::models::{NewOrder, Order};
use order_service::{AppState, InMemoryOrderStore, OrderStore, StorageError};
use serde_json::{json, Value};
use std::sync::{Arc, Once};

// Fixed display strings so assertions can compare against literals.
pub const USER_ID: &str = "64b7f0c2a1d4e5f6a7b8c9a1";
pub const RESTAURANT_ID: &str = "64b7f0c2a1d4e5f6a7b8c9b1";
pub const DELIVERY_PERSON_D1: &str = "64b7f0c2a1d4e5f6a7b8c9d1";
pub const DELIVERY_PERSON_D2: &str = "64b7f0c2a1d4e5f6a7b8c9d2";

pub fn setup_tracing() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  });
}

pub fn app_state(store: Arc<dyn OrderStore>) -> web::Data<AppState> {
  web::Data::new(AppState::new(store))
}

pub fn order_path() -> String {
  format!("/order/{}/{}", USER_ID, RESTAURANT_ID)
}

pub fn status_path(order_id: &str) -> String {
  format!("/order/{}/status", order_id)
}

/// A complete creation body: placed, 25.5, assigned to D1.
pub fn create_payload() -> Value {
  json!({
    "status": "placed",
    "menu_detail": [{ "item": "margherita", "qty": 1 }, { "item": "tiramisu", "qty": 2 }],
    "total_price": 25.5,
    "delivery_person_id": DELIVERY_PERSON_D1
  })
}

/// Seeds one order directly through the store and returns its display id.
pub async fn seed_order(store: &InMemoryOrderStore, status: &str) -> String {
  let order = NewOrder {
    user_id: ObjectId::parse_str(USER_ID).unwrap(),
    restaurant_id: ObjectId::parse_str(RESTAURANT_ID).unwrap(),
    status: status.to_string(),
    menu_detail: json!(["ramen"]),
    total_price: serde_json::Number::from(14),
    delivery_person_id: ObjectId::parse_str(DELIVERY_PERSON_D1).unwrap(),
  };
  store.insert(order).await.unwrap().to_hex()
}

/// A store whose backend is always down.
pub struct FailingOrderStore;

#[async_trait]
impl OrderStore for FailingOrderStore {
  async fn insert(&self, _order: NewOrder) -> Result<ObjectId, StorageError> {
    Err(StorageError::Backend("connection refused".to_string()))
  }

  async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Order>, StorageError> {
    Err(StorageError::Backend("connection refused".to_string()))
  }

  async fn update_status(&self, _id: ObjectId, _status: &str) -> Result<u64, StorageError> {
    Err(StorageError::Backend("connection refused".to_string()))
  }
}
