//! Error types for the Steam client library.

use thiserror::Error;

/// The main error type for all Steam client operations.
#[derive(Error, Debug)]
pub enum SteamError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A Steam Guard secret is not valid base64.
    #[error("failed to decode {kind} secret: {source}")]
    SecretDecode {
        /// Which secret failed to decode
        kind: SecretKind,
        /// Underlying base64 error
        #[source]
        source: base64::DecodeError,
    },

    /// Invalid configuration (fatal at setup time)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Steam answered with a non-success HTTP status
    #[error("Steam returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: reqwest::StatusCode,
        /// Requested URL, without query string
        url: String,
    },

    /// Steam reported a failed action in the response body
    #[error("Steam API error: {0}")]
    Api(ApiError),

    /// Login needs a Steam Guard code but none was supplied
    #[error("two-factor authentication required")]
    TwoFactorRequired,

    /// Login was rejected pending a captcha
    #[error("captcha required: {gid}")]
    CaptchaRequired {
        /// Captcha identifier returned by Steam
        gid: String,
    },

    /// Login was rejected for another reason
    #[error("login failed: {0}")]
    LoginFailed(String),

    /// Community actions need a session id
    #[error("Missing session id: community actions require a logged-in session")]
    MissingSession,

    /// Web API calls need an API key
    #[error("Missing credentials: a Steam Web API key is required")]
    MissingApiKey,

    /// Mobile confirmations need an identity secret
    #[error("Missing Steam Guard: an identity secret is required for confirmations")]
    MissingGuard,

    /// The rate limiter was shut down while a caller was waiting
    #[error("Rate limiter has been shut down")]
    RateLimiterClosed,

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Identifies the secret that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    /// Shared secret used for login codes.
    Shared,
    /// Identity secret used for confirmation signatures.
    Identity,
}

impl std::fmt::Display for SecretKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretKind::Shared => write!(f, "shared"),
            SecretKind::Identity => write!(f, "identity"),
        }
    }
}

/// Failure reported by Steam in an otherwise well-formed response.
///
/// Community endpoints answer `200 OK` with `{"success": false, ...}` or omit
/// the expected identifier when an action is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The action that failed (e.g. "sellitem")
    pub action: String,
    /// Message from Steam, or the raw body when none was given
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.action, self.message)
    }
}

impl ApiError {
    /// Create a new API error from action and message.
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

impl SteamError {
    /// Check if this error came from a malformed Steam Guard secret.
    pub fn is_secret_decode(&self) -> bool {
        matches!(self, SteamError::SecretDecode { .. })
    }

    /// Check if this error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, SteamError::Config(_))
    }
}
