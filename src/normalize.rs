//! The normalization pass: database-layer errors in, HTTP errors out.

use std::error::Error;

use indexmap::IndexMap;

use crate::codes::ErrorCode;
use crate::db::{DriverError, ValidationError};
use crate::http::HttpError;
use crate::response::FieldMessage;
use crate::rules::Rule;

/// Boxed error as accepted and returned by [`Normalizer::normalize`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Converts database-layer errors into [`HttpError`]s.
///
/// Classification happens once, at the boundary: a boxed error either
/// downcasts to one of the [`crate::db`] types or passes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: IndexMap<ErrorCode, Rule>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule for a named server error code.
    ///
    /// Rules are consulted in registration order and the first match wins.
    /// Registering the same code again replaces the earlier rule.
    pub fn rule(mut self, code: ErrorCode, rule: impl Into<Rule>) -> Self {
        self.rules.insert(code, rule.into());
        self
    }

    /// Normalize `err` into an [`HttpError`], or return it unchanged when it
    /// is not database-originated.
    pub fn normalize(&self, err: BoxError) -> BoxError {
        if let Some(validation) = err.downcast_ref::<ValidationError>() {
            return Box::new(self.normalize_validation(validation));
        }
        if let Some(driver) = err.downcast_ref::<DriverError>() {
            return Box::new(self.normalize_driver(driver));
        }
        err
    }

    fn normalize_driver(&self, err: &DriverError) -> HttpError {
        if let Some(code) = err.code {
            for (name, rule) in &self.rules {
                if name.matches(code) {
                    return rule.to_error();
                }
            }
            tracing::debug!(code, "no rule matched driver error code");
        }
        HttpError::bad_request(err.message.clone())
    }

    fn normalize_validation(&self, err: &ValidationError) -> HttpError {
        let mut errors = IndexMap::new();
        for field in err.errors.values() {
            let (Some(path), Some(message)) = (&field.path, &field.message) else {
                tracing::debug!("skipping field error without path or message");
                continue;
            };
            errors.insert(
                path.clone(),
                FieldMessage {
                    message: message.clone(),
                },
            );
        }

        let Some((_, first)) = errors.first() else {
            return HttpError::bad_request(err.message.clone());
        };
        let message = first.message.clone();
        HttpError::unprocessable_entity(message).with_errors(errors)
    }
}

/// Normalize with no user rules.
pub fn normalize(err: BoxError) -> BoxError {
    Normalizer::new().normalize(err)
}
