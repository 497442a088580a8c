// order_service/src/web/routes.rs

use actix_web::web;
use tracing::warn;

use crate::errors::AppError;
use crate::web::handlers::order_handlers;

/// Turns body deserialization failures (wrong content type, malformed JSON,
/// wrongly typed fields) into a 400 with the usual `{"msg": ...}` body.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    warn!(error = %err, "Rejected request payload.");
    AppError::Validation(format!("Invalid JSON payload: {}", err)).into()
  })
}

// Called in `main.rs` (and by the integration tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config()).service(
    web::scope("/order")
      // Registered first so `/order/{id}/status` is never read as a restaurant id.
      .route(
        "/{order_id}/status",
        web::put().to(order_handlers::update_order_status_handler),
      )
      .route(
        "/{user_id}/{restaurant_id}",
        web::post().to(order_handlers::add_order_handler),
      ),
  );
}
