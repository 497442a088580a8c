// order_service/src/models/order.rs

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::ids::to_display;

/// An order as stored in the `order` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  pub user_id: ObjectId,
  pub restaurant_id: ObjectId,
  pub status: String,
  pub menu_detail: Value, // Opaque, echoed back as given
  pub total_price: Number, // Kept as sent: integers stay integers
  pub delivery_person_id: ObjectId,
}

/// An order that has not been persisted yet; the store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
  pub user_id: ObjectId,
  pub restaurant_id: ObjectId,
  pub status: String,
  pub menu_detail: Value,
  pub total_price: Number,
  pub delivery_person_id: ObjectId,
}

impl NewOrder {
  pub fn with_id(self, id: ObjectId) -> Order {
    Order {
      id,
      user_id: self.user_id,
      restaurant_id: self.restaurant_id,
      status: self.status,
      menu_detail: self.menu_detail,
      total_price: self.total_price,
      delivery_person_id: self.delivery_person_id,
    }
  }
}

/// Response shape of an order: every identifier as its display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
  #[serde(rename = "_id")]
  pub id: String,
  pub user_id: String,
  pub restaurant_id: String,
  pub status: String,
  pub menu_detail: Value,
  pub total_price: Number,
  pub delivery_person_id: String,
}

impl From<Order> for OrderView {
  fn from(order: Order) -> Self {
    Self {
      id: to_display(&order.id),
      user_id: to_display(&order.user_id),
      restaurant_id: to_display(&order.restaurant_id),
      status: order.status,
      menu_detail: order.menu_detail,
      total_price: order.total_price,
      delivery_person_id: to_display(&order.delivery_person_id),
    }
  }
}
