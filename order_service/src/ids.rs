// order_service/src/ids.rs

//! Conversion between external display strings and stored `ObjectId`s.

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
  #[error("'{value}' is not a valid {field}: expected a 24-character hex string")]
  Invalid { field: &'static str, value: String },
}

/// Parses the display string of an identifier. `field` names the input
/// the value came from so the client can tell which one was rejected.
pub fn parse_id(field: &'static str, value: &str) -> Result<ObjectId, IdError> {
  ObjectId::parse_str(value).map_err(|_| IdError::Invalid {
    field,
    value: value.to_string(),
  })
}

pub fn to_display(id: &ObjectId) -> String {
  id.to_hex()
}
