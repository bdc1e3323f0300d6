use serde_json::Value;
use thiserror::Error;

/// Main error type for ad posting API operations
#[derive(Debug, Error)]
pub enum Error {
    /// A field value violated a documented constraint
    #[error("{0}")]
    InvalidArgument(String),

    /// A structurally valid value combination violated a service policy
    #[error("{0}")]
    Validation(String),

    /// HTTP 400
    #[error("{0}")]
    BadRequest(String),

    /// HTTP 401
    #[error("{0}")]
    Unauthorized(String),

    /// HTTP 403
    #[error("{0}")]
    Forbidden(String),

    /// HTTP 404
    #[error("{0}")]
    NotFound(String),

    /// HTTP 422
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Any other 4xx/5xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map an HTTP status code and decoded response body to a typed error.
    ///
    /// Returns `None` for statuses outside the 400..=600 range, which are
    /// passed through as success. The inclusive 600 upper bound matches the
    /// service's behavior.
    ///
    /// The message is taken from the first entry of the body's `errors` array
    /// when present, with a per-status default otherwise. 400 responses carry
    /// their message in a top-level `message` field instead.
    pub fn from_status(status: u16, body: &Value) -> Option<Self> {
        if !(400..=600).contains(&status) {
            return None;
        }

        let error = body
            .get("errors")
            .and_then(|e| e.get(0))
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .map(|s| s.to_string());

        Some(match status {
            400 => {
                let message = body
                    .get("message")
                    .and_then(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .unwrap_or("Bad request");
                Error::BadRequest(message.to_string())
            }
            401 => Error::Unauthorized(error.unwrap_or_else(|| "Unauthorized".to_string())),
            403 => Error::Forbidden(error.unwrap_or_else(|| "Forbidden".to_string())),
            404 => Error::NotFound("Resource not found".to_string()),
            422 => Error::UnprocessableEntity(
                error.unwrap_or_else(|| "Unprocessable entity".to_string()),
            ),
            _ => Error::Api {
                status,
                message: error.unwrap_or_else(|| "Unknown server error".to_string()),
            },
        })
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error is an authorization failure (401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Get the HTTP status code if this error was mapped from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest(_) => Some(400),
            Error::Unauthorized(_) => Some(401),
            Error::Forbidden(_) => Some(403),
            Error::NotFound(_) => Some(404),
            Error::UnprocessableEntity(_) => Some(422),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for ad posting operations
pub type Result<T> = std::result::Result<T, Error>;
