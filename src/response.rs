//! Wire-format error body.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::http::HttpError;

/// JSON body for a normalized error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub errors: IndexMap<String, FieldMessage>,
}

/// Message attached to one failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    pub message: String,
}

impl From<&HttpError> for ErrorResponse {
    fn from(err: &HttpError) -> Self {
        Self {
            status_code: err.status,
            message: err.message.clone(),
            errors: err.errors.clone(),
        }
    }
}
