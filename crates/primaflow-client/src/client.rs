use tracing::{info, warn};

use primaflow_auth::{TokenFetcher, TokenManager};

use crate::config::RetryConfig;
use crate::error::SubmissionError;
use crate::payload::{ApiErrorBody, SubmitAck, SubmitRequest};
use crate::transport::Transport;

/// Delivers a finished submission with bounded retries.
///
/// Outcome classes: transport failures, 429 and 5xx are retryable up to
/// the attempt cap; 401 gets exactly one forced token refresh and one
/// replay; any other 4xx is a terminal validation failure. Every attempt
/// re-reads the token manager so a refreshed header is never stale.
pub struct SubmissionClient<T, F> {
    transport: T,
    tokens: TokenManager<F>,
    config: RetryConfig,
}

impl<T: Transport, F: TokenFetcher> SubmissionClient<T, F> {
    pub fn new(transport: T, tokens: TokenManager<F>, config: RetryConfig) -> Self {
        SubmissionClient {
            transport,
            tokens,
            config,
        }
    }

    pub async fn submit(&self, request: &SubmitRequest) -> Result<SubmitAck, SubmissionError> {
        let mut attempt: u32 = 1;
        let mut refreshed_after_401 = false;

        loop {
            let token = self.attempt_token().await?;

            info!(attempt, "submitting assessment");
            let outcome = self.transport.send(request, token.as_deref()).await;

            let reply = match outcome {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(attempt, error = %e, "transport failure");
                    attempt = self.next_attempt_or_give_up(attempt, e.to_string(), None).await?;
                    continue;
                }
            };

            match reply.status {
                200..=299 => {
                    let ack: SubmitAck = serde_json::from_str(&reply.body)
                        .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;
                    info!(assessment_id = %ack.assessment_id, "submission acknowledged");
                    return Ok(ack);
                }
                401 => {
                    if refreshed_after_401 {
                        // One refresh, one replay. A second 401 means the
                        // token path itself is broken.
                        return Err(SubmissionError::Authentication(
                            "request rejected again after token refresh".into(),
                        ));
                    }
                    warn!(attempt, "401 from backend, forcing token refresh");
                    refreshed_after_401 = true;
                    if self.config.require_token {
                        self.tokens.refresh().await?;
                    } else if let Err(e) = self.tokens.refresh().await {
                        warn!(error = %e, "token refresh failed, replaying unauthenticated");
                    }
                    // Immediate replay; does not consume a backoff slot.
                    continue;
                }
                429 => {
                    warn!(attempt, "rate limited");
                    attempt = self
                        .next_attempt_or_give_up(attempt, "rate limited".into(), reply.retry_after)
                        .await?;
                    continue;
                }
                400..=499 => {
                    // Validation failure: never retried, field errors
                    // surfaced verbatim.
                    return Err(match serde_json::from_str::<ApiErrorBody>(&reply.body) {
                        Ok(body) => SubmissionError::Validation {
                            message: body.error,
                            errors: body.errors.or(body.details),
                        },
                        Err(_) => SubmissionError::Validation {
                            message: format!("backend rejected the submission ({})", reply.status),
                            errors: None,
                        },
                    });
                }
                status => {
                    warn!(attempt, status, "server error");
                    attempt = self
                        .next_attempt_or_give_up(attempt, format!("status {status}"), None)
                        .await?;
                    continue;
                }
            }
        }
    }

    /// Read the token manager for this attempt. Never reuses a header
    /// value computed before a refresh.
    async fn attempt_token(&self) -> Result<Option<String>, SubmissionError> {
        match self.tokens.ensure_token().await {
            Ok(token) => Ok(Some(token.value)),
            Err(e) if self.config.require_token => Err(SubmissionError::Token(e)),
            Err(e) => {
                warn!(error = %e, "proceeding without anti-forgery token");
                Ok(None)
            }
        }
    }

    /// Sleep out the backoff (or the server-provided delay) and bump the
    /// attempt counter, or give up at the cap.
    async fn next_attempt_or_give_up(
        &self,
        attempt: u32,
        last: String,
        server_delay: Option<std::time::Duration>,
    ) -> Result<u32, SubmissionError> {
        if attempt >= self.config.max_attempts {
            return Err(SubmissionError::RetryExhausted {
                attempts: attempt,
                last,
            });
        }
        let delay = server_delay.unwrap_or_else(|| self.config.backoff_delay(attempt));
        tokio::time::sleep(delay).await;
        Ok(attempt + 1)
    }
}
