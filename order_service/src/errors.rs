// order_service/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt::Display;
use thiserror::Error;

use crate::ids::IdError;

pub const NO_CHANGES_MSG: &str = "No changes made to the order";

#[derive(Debug, Error)]
pub enum AppError {
  /// Missing or malformed request input.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Invalid Identifier: {0}")]
  InvalidIdentifier(#[from] IdError),

  /// The caller is not the delivery person recorded on the order.
  #[error("Authorization Failed: {0}")]
  Unauthorized(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// The update matched an order but modified nothing.
  #[error("{}", NO_CHANGES_MSG)]
  NoChanges,

  #[error("Configuration Error: {0}")]
  Config(String),

  /// Storage, serialization or any other failure the caller cannot fix.
  /// `msg` is what the client sees, `detail` goes into the `error` field.
  #[error("{msg}: {detail}")]
  Unexpected { msg: &'static str, detail: String },
}

impl AppError {
  pub fn unexpected(msg: &'static str, err: impl Display) -> Self {
    AppError::Unexpected {
      msg,
      detail: err.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::InvalidIdentifier(_) | AppError::NoChanges => StatusCode::BAD_REQUEST,
      AppError::Unauthorized(_) => StatusCode::FORBIDDEN,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    if self.status_code().is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }

    let body = match self {
      AppError::Validation(m) | AppError::Unauthorized(m) | AppError::NotFound(m) => json!({ "msg": m }),
      AppError::InvalidIdentifier(e) => json!({ "msg": "Invalid identifier", "error": e.to_string() }),
      AppError::NoChanges => json!({ "msg": NO_CHANGES_MSG }),
      AppError::Config(m) => json!({ "msg": "Configuration issue", "error": m }),
      AppError::Unexpected { msg, detail } => json!({ "msg": msg, "error": detail }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
