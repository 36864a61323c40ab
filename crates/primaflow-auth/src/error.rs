use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token fetch failed: {0}")]
    Fetch(String),

    #[error("token endpoint returned an invalid response: {0}")]
    InvalidResponse(String),
}
