//! # Mongo HTTP Error
//!
//! Normalizes MongoDB driver and document-mapper errors into HTTP errors.
//!
//! Errors that are not database-originated pass through untouched, so the
//! normalizer can sit in front of a web framework's error handling without
//! claiming errors it does not understand.
//!
//! ```
//! use mongo_http_error::{DriverError, ErrorCode, HttpError, Normalizer};
//!
//! let normalizer = Normalizer::new().rule(ErrorCode::DuplicateKey, "email already taken");
//!
//! let err = DriverError::new("E11000 duplicate key error").with_code(11000);
//! let normalized = normalizer.normalize(Box::new(err));
//!
//! let http = normalized.downcast_ref::<HttpError>().unwrap();
//! assert_eq!(http.status, 400);
//! assert_eq!(http.message, "email already taken");
//! ```

pub mod codes;
pub mod db;
pub mod http;
pub mod normalize;
pub mod response;
pub mod rules;

pub use codes::ErrorCode;
pub use db::{DriverError, FieldError, ValidationError};
pub use http::HttpError;
pub use normalize::{BoxError, Normalizer, normalize};
pub use response::{ErrorResponse, FieldMessage};
pub use rules::Rule;
