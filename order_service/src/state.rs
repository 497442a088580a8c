// order_service/src/state.rs
use crate::store::OrderStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn OrderStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn OrderStore>) -> Self {
    Self { store }
  }
}
