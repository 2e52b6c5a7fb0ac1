//! Database-layer error types recognized by the normalizer.
//!
//! These model the two error shapes a document-mapper stack produces: the
//! mapper's validation failures with per-field sub-errors, and the driver's
//! server-reported failures with a numeric code. The mapper and driver
//! themselves stay external; they are producers of these values.

use indexmap::IndexMap;
use thiserror::Error;

/// Mapper-level validation failure carrying per-field sub-errors.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    /// Sub-errors keyed by field id, in insertion order.
    pub errors: IndexMap<String, FieldError>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, field: FieldError) -> Self {
        self.errors.insert(key.into(), field);
        self
    }
}

/// A single per-field failure nested inside a [`ValidationError`].
///
/// Producers do not always populate both fields; entries missing either one
/// are dropped during normalization.
#[derive(Debug, Clone, Default)]
pub struct FieldError {
    pub path: Option<String>,
    pub message: Option<String>,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: Some(message.into()),
        }
    }
}

/// Driver-level failure, optionally carrying a server error code.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DriverError {
    pub message: String,
    pub code: Option<i32>,
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let validation = ValidationError::new("Post validation failed");
        assert_eq!(validation.to_string(), "Post validation failed");

        let driver = DriverError::new("connection reset by peer").with_code(89);
        assert_eq!(driver.to_string(), "connection reset by peer");
        assert_eq!(driver.code, Some(89));
    }

    #[test]
    fn test_fields_keep_registration_order() {
        let err = ValidationError::new("Validation failed")
            .with_field("title", FieldError::new("title", "required"))
            .with_field("body", FieldError::new("body", "too short"));

        let keys: Vec<_> = err.errors.keys().collect();
        assert_eq!(keys, ["title", "body"]);
    }
}
