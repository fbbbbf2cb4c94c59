//! Error values for endpoint failures: a status code plus a client-facing
//! message, ready for the host to serialize into a response.

use std::fmt;

use http::StatusCode;

/// A failure raised while handling an endpoint request.
///
/// Carries the HTTP status to answer with and a message safe to show to the
/// client. Internal detail stays out of the message; log it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 400 failure for invalid client input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// The 500 failure hosts answer with when a handler fails unexpectedly.
    /// The message is fixed so nothing internal leaks to the client.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error occurred")
    }

    /// The default failure for a bare status code: the canonical reason
    /// phrase, lowercased (`404` -> `"not found"`). Codes without a
    /// canonical reason fall back to `"status {code}"`.
    pub fn for_status(status: StatusCode) -> Self {
        let message = status
            .canonical_reason()
            .map(str::to_lowercase)
            .unwrap_or_else(|| format!("status {}", status.as_u16()));
        Self::new(status, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}
