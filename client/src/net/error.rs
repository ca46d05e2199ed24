//! Failure taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every view owns its error state. API helpers return [`ApiError`] and the
//! view turns it into display text with [`ApiError::user_message`], passing
//! the fallback it wants when the server gave nothing better.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const NO_RESPONSE_MESSAGE: &str = "No response from server - please try again later";
pub const TIMEOUT_MESSAGE: &str = "Request timeout - server is taking too long to respond";
pub const SIGNED_OUT_MESSAGE: &str = "Please log in to continue";

/// Why a REST call did not produce the expected value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the login credentials.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The request went out but no response came back.
    #[error("no response from server")]
    Network,
    /// No response within the client-side deadline.
    #[error("request timed out")]
    Timeout,
    /// Non-2xx response.
    #[error("server responded {status} {status_text}")]
    Server {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
    /// The request could not be built.
    #[error("request build failed: {0}")]
    Request(String),
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// A session-only call was attempted without a stored credential.
    #[error("missing session credential")]
    MissingToken,
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a failed response, lifting the
    /// backend's `message` field out of the body when it has one.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Server {
            status,
            status_text: status_text.to_owned(),
            message,
        }
    }

    /// Text to show the user. Server messages are shown verbatim.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_owned(),
            Self::Network => NO_RESPONSE_MESSAGE.to_owned(),
            Self::Timeout => TIMEOUT_MESSAGE.to_owned(),
            Self::MissingToken => SIGNED_OUT_MESSAGE.to_owned(),
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Server { status_text, .. } if !status_text.is_empty() => status_text.clone(),
            Self::Server { .. } | Self::Request(_) | Self::Decode(_) | Self::Unavailable => fallback.to_owned(),
        }
    }
}
