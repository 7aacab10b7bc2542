use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while talking to the records API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {}", .details.as_deref().unwrap_or("no details"))]
    Status {
        status: StatusCode,
        details: Option<String>,
    },

    #[error("Account is denied")]
    AccountDenied,

    #[error("Token expired")]
    TokenExpired,

    #[error("Session time out. Please login again")]
    SessionTimeout,

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header name: {0}")]
    InvalidHeader(String),

    #[error("Invalid id: {0:?}")]
    InvalidPathSegment(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ClientError {
    /// Build a status error from a non-2xx response body
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let details = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.details.or(b.message));
        ClientError::Status { status, details }
    }

    /// Upstream HTTP status, when the failure carried one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(err) => err.status(),
            ClientError::AccountDenied => Some(StatusCode::FORBIDDEN),
            ClientError::TokenExpired | ClientError::SessionTimeout => {
                Some(StatusCode::UNAUTHORIZED)
            }
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            ClientError::Status { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// Translate the login endpoint's failure details into session errors.
    pub(crate) fn into_login_error(self) -> Self {
        match self.details() {
            Some("Access denied") => ClientError::AccountDenied,
            Some("Token expired") => ClientError::TokenExpired,
            Some("Token revoked") => ClientError::SessionTimeout,
            _ => self,
        }
    }
}
