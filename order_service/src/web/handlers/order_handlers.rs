// order_service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Number, Value};
use tracing::{error, info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::ids::{parse_id, to_display};
use crate::models::{NewOrder, OrderView};
use crate::state::AppState;

const ADD_ORDER_FAILED: &str = "Error adding order";
const UPDATE_STATUS_FAILED: &str = "Error updating order status";

// --- Request DTOs ---
// Every field is optional at the serde level so a missing one can be reported
// by name instead of as a generic deserialization error. For typed fields
// `null` counts as missing; `menu_detail` is opaque, so `null` is a value.

#[derive(Deserialize, Debug)]
pub struct AddOrderPayload {
  pub status: Option<String>,
  #[serde(default, deserialize_with = "present")]
  pub menu_detail: Option<Value>,
  pub total_price: Option<Number>,
  pub delivery_person_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateStatusPayload {
  pub delivery_person_id: Option<String>,
  pub status: Option<String>,
}

/// Maps any present value, `null` included, to `Some`. Absent fields fall
/// back to `None` through `#[serde(default)]`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
  D: Deserializer<'de>,
{
  Value::deserialize(deserializer).map(Some)
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
  value.ok_or_else(|| AppError::Validation(format!("Missing required field: {}", field)))
}

// --- Handler Implementation ---

#[instrument(
    name = "handler::add_order",
    skip(app_state, path, req_payload),
    fields(user_id = %path.0, restaurant_id = %path.1)
)]
pub async fn add_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
  req_payload: web::Json<AddOrderPayload>,
) -> Result<HttpResponse> {
  let (user_id, restaurant_id) = path.into_inner();
  let payload = req_payload.into_inner();

  let status = required(payload.status, "status")?;
  let menu_detail = required(payload.menu_detail, "menu_detail")?;
  let total_price = required(payload.total_price, "total_price")?;
  let delivery_person_id = required(payload.delivery_person_id, "delivery_person_id")?;

  let new_order = NewOrder {
    user_id: parse_id("user_id", &user_id)?,
    restaurant_id: parse_id("restaurant_id", &restaurant_id)?,
    status,
    menu_detail,
    total_price,
    delivery_person_id: parse_id("delivery_person_id", &delivery_person_id)?,
  };

  let order_id = app_state.store.insert(new_order).await.map_err(|e| {
    error!("Failed to insert order: {}", e);
    AppError::unexpected(ADD_ORDER_FAILED, e)
  })?;

  // Separate read, not atomic with the insert above.
  let inserted = app_state
    .store
    .find_by_id(order_id)
    .await
    .map_err(|e| {
      error!("Failed to read back order {}: {}", order_id, e);
      AppError::unexpected(ADD_ORDER_FAILED, e)
    })?
    .ok_or_else(|| {
      AppError::unexpected(
        ADD_ORDER_FAILED,
        format!("order {} was not found after insert", to_display(&order_id)),
      )
    })?;

  info!(order_id = %order_id, "Order added.");

  Ok(HttpResponse::Created().json(json!({
      "msg": "Order added successfully",
      "order_data": OrderView::from(inserted)
  })))
}

#[instrument(name = "handler::update_order_status", skip(app_state, path, req_payload), fields(order_id = %path.as_ref()))]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<UpdateStatusPayload>,
) -> Result<HttpResponse> {
  let payload = req_payload.into_inner();
  let (Some(delivery_person_id), Some(status)) = (payload.delivery_person_id, payload.status) else {
    return Err(AppError::Validation(
      "Missing required fields: 'delivery_person_id' and 'status'".to_string(),
    ));
  };

  let order_id = parse_id("order_id", &path.into_inner())?;

  let order = app_state
    .store
    .find_by_id(order_id)
    .await
    .map_err(|e| {
      error!("Database error while fetching order {}: {}", order_id, e);
      AppError::unexpected(UPDATE_STATUS_FAILED, e)
    })?
    .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

  // Compared as display strings; the caller's value is never parsed.
  if to_display(&order.delivery_person_id) != delivery_person_id {
    warn!(
      caller = %delivery_person_id,
      "Delivery person is not assigned to order {}.",
      order_id
    );
    return Err(AppError::Unauthorized(
      "Unauthorized: You are not assigned to this order".to_string(),
    ));
  }

  let modified = app_state.store.update_status(order_id, &status).await.map_err(|e| {
    error!("Failed to update status of order {}: {}", order_id, e);
    AppError::unexpected(UPDATE_STATUS_FAILED, e)
  })?;

  if modified == 0 {
    info!(status = %status, "Status update for order {} changed nothing.", order_id);
    return Err(AppError::NoChanges);
  }

  // The order may have been removed between the update and this read.
  let updated = app_state
    .store
    .find_by_id(order_id)
    .await
    .map_err(|e| AppError::unexpected(UPDATE_STATUS_FAILED, e))?
    .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

  info!(status = %updated.status, "Order {} status updated.", order_id);

  Ok(HttpResponse::Ok().json(json!({
      "msg": "Order status updated successfully",
      "order": OrderView::from(updated)
  })))
}
