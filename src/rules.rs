//! User-supplied classification rules.

use crate::http::HttpError;

/// How a matched database error code should surface to clients.
#[derive(Debug, Clone)]
pub enum Rule {
    /// HTTP 400 with the given message.
    Message(String),
    /// HTTP error with an explicit status and message.
    Status { status: u16, message: String },
    /// A pre-built error, used as-is.
    Error(HttpError),
}

impl Rule {
    /// Error produced when this rule matches.
    pub fn to_error(&self) -> HttpError {
        match self {
            Rule::Message(message) => HttpError::bad_request(message.clone()),
            Rule::Status { status, message } => HttpError::new(*status, message.clone()),
            Rule::Error(err) => err.clone(),
        }
    }
}

impl From<&str> for Rule {
    fn from(message: &str) -> Self {
        Rule::Message(message.to_owned())
    }
}

impl From<String> for Rule {
    fn from(message: String) -> Self {
        Rule::Message(message)
    }
}

impl From<(u16, &str)> for Rule {
    fn from((status, message): (u16, &str)) -> Self {
        Rule::Status {
            status,
            message: message.to_owned(),
        }
    }
}

impl From<HttpError> for Rule {
    fn from(err: HttpError) -> Self {
        Rule::Error(err)
    }
}
