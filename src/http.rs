//! HTTP error values produced by normalization.

use indexmap::IndexMap;
use thiserror::Error;

#[cfg(feature = "actix")]
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

#[cfg(feature = "actix")]
use crate::response::ErrorResponse;
use crate::response::FieldMessage;

/// An error carrying an HTTP status, suitable for returning from a web server.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpError {
    pub status: u16,
    pub message: String,
    /// Per-field messages for multi-field validation failures; empty otherwise.
    pub errors: IndexMap<String, FieldMessage>,
}

impl HttpError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: IndexMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(422, message)
    }

    pub fn with_errors(mut self, errors: IndexMap<String, FieldMessage>) -> Self {
        self.errors = errors;
        self
    }
}

#[cfg(feature = "actix")]
impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(HttpError::bad_request("nope").status, 400);
        assert_eq!(HttpError::unprocessable_entity("nope").status, 422);
        assert_eq!(HttpError::new(409, "taken").status, 409);
    }

    #[test]
    fn test_display_is_the_message() {
        assert_eq!(HttpError::bad_request("malformed id").to_string(), "malformed id");
    }

    #[test]
    fn test_with_errors_attaches_field_map() {
        let mut errors = IndexMap::new();
        errors.insert(
            "email".to_owned(),
            FieldMessage {
                message: "invalid".to_owned(),
            },
        );

        let err = HttpError::unprocessable_entity("invalid").with_errors(errors);
        assert_eq!(err.errors["email"].message, "invalid");
    }
}

#[cfg(all(test, feature = "actix"))]
mod actix_tests {
    use super::*;

    #[test]
    fn test_status_code_reflects_stored_status() {
        assert_eq!(HttpError::unprocessable_entity("nope").status_code().as_u16(), 422);
    }

    #[test]
    fn test_out_of_range_status_degrades_to_500() {
        assert_eq!(HttpError::new(99, "bad").status_code().as_u16(), 500);
    }

    #[test]
    fn test_error_response_uses_status() {
        let resp = HttpError::bad_request("nope").error_response();
        assert_eq!(resp.status().as_u16(), 400);
    }
}
