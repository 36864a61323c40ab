use std::time::Duration;

/// Retry and timeout policy for submissions.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempt cap, including the first. The client always gives up
    /// deterministically.
    pub max_attempts: u32,
    /// First backoff delay; each subsequent delay doubles.
    pub base_delay: Duration,
    /// Per-request timeout. A request that exceeds it counts as a
    /// retryable transport failure.
    pub timeout: Duration,
    /// When true, a token fetch failure blocks submission. When false,
    /// the request proceeds without the anti-forgery header and the
    /// backend decides.
    pub require_token: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: 4,
            base_delay: Duration::from_millis(500),
            timeout: Duration::from_secs(10),
            require_token: true,
        }
    }
}

impl RetryConfig {
    /// Delay before the attempt after `attempt` (1-based). Doubles every
    /// attempt, so the sequence is strictly increasing.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}
