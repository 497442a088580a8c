// order_service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use order_service::web::configure_app_routes;
use order_service::{AppConfig, AppState, MongoOrderStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default level
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting order service...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let store = MongoOrderStore::connect(&app_config.mongo_uri, &app_config.mongo_database)
    .await
    .context("Invalid MongoDB connection string")?;

  // An unreachable database does not stop the server; requests fail with 500 until it is back.
  match store.ping().await {
    Ok(()) => tracing::info!("Database connected successfully."),
    Err(e) => tracing::error!(error = %e, "Failed to connect to the database."),
  }

  let app_state = AppState::new(Arc::new(store));

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
