use thiserror::Error;

use primaflow_auth::AuthError;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("token error: {0}")]
    Token(#[from] AuthError),

    /// A second consecutive 401 after a forced token refresh.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// 4xx other than 401/429. Never retried; field errors are carried
    /// verbatim for the caller to surface inline.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        errors: Option<serde_json::Value>,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned an unparseable response: {0}")]
    InvalidResponse(String),

    /// The bounded retry schedule ran out. Terminal; the caller owns the
    /// manual retry affordance.
    #[error("submission failed after {attempts} attempts: {last}")]
    RetryExhausted { attempts: u32, last: String },

    #[error("response is not ready for submission: {0}")]
    IncompleteResponse(String),
}
