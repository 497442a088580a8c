// order_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8082;
pub const DEFAULT_MONGO_DATABASE: &str = "FoodDeliveryApp";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub mongo_uri: String,
  pub mongo_database: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_process_env()
  }

  /// Reads the process environment only; no `.env` file is consulted.
  pub fn from_process_env() -> Result<Self> {
    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
    let server_port = match get_env("SERVER_PORT") {
      Ok(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      Err(_) => DEFAULT_SERVER_PORT,
    };
    let mongo_uri = get_env("MONGO_URI")?;
    let mongo_database = get_env("MONGO_DATABASE").unwrap_or_else(|_| DEFAULT_MONGO_DATABASE.to_string());

    // The connection string may carry credentials, so only the target database is logged.
    tracing::info!(database = %mongo_database, "Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      mongo_uri,
      mongo_database,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn clear_env() {
    for var in ["SERVER_HOST", "SERVER_PORT", "MONGO_URI", "MONGO_DATABASE"] {
      env::remove_var(var);
    }
  }

  #[test]
  #[serial]
  fn test_from_env_applies_defaults() {
    clear_env();
    env::set_var("MONGO_URI", "mongodb://localhost:27017");

    let config = AppConfig::from_process_env().expect("config should load");
    assert_eq!(config.server_host, DEFAULT_SERVER_HOST);
    assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
    assert_eq!(config.mongo_database, DEFAULT_MONGO_DATABASE);
    assert_eq!(config.server_address(), "0.0.0.0:8082");
    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var("MONGO_URI", "mongodb://db.internal:27017");
    env::set_var("MONGO_DATABASE", "OrdersTest");
    env::set_var("SERVER_HOST", "127.0.0.1");
    env::set_var("SERVER_PORT", "9000");

    let config = AppConfig::from_process_env().expect("config should load");
    assert_eq!(config.mongo_uri, "mongodb://db.internal:27017");
    assert_eq!(config.mongo_database, "OrdersTest");
    assert_eq!(config.server_address(), "127.0.0.1:9000");
    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_rejects_bad_port() {
    clear_env();
    env::set_var("MONGO_URI", "mongodb://localhost:27017");
    env::set_var("SERVER_PORT", "not-a-port");

    match AppConfig::from_process_env() {
      Err(AppError::Config(msg)) => assert!(msg.contains("SERVER_PORT")),
      other => panic!("Expected AppError::Config, got {:?}", other),
    }
    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_requires_mongo_uri() {
    clear_env();

    match AppConfig::from_process_env() {
      Err(AppError::Config(msg)) => assert!(msg.contains("MONGO_URI")),
      other => panic!("Expected AppError::Config, got {:?}", other),
    }
  }
}
