use std::time::Duration;

use crate::error::SubmissionError;
use crate::payload::SubmitRequest;

/// Anti-forgery header name expected by the backend.
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// A raw reply: status, optional server-provided retry delay, body text.
/// Classification happens in the client, not here.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub retry_after: Option<Duration>,
    pub body: String,
}

/// One network attempt. `Err` means no usable response arrived (connect
/// failure, timeout) — always retryable. Tests substitute scripted fakes.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &SubmitRequest,
        token: Option<&str>,
    ) -> impl Future<Output = Result<HttpReply, SubmissionError>> + Send;
}

/// The production transport: POSTs the payload as JSON.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        HttpTransport {
            http,
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &SubmitRequest,
        token: Option<&str>,
    ) -> Result<HttpReply, SubmissionError> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request);

        if let Some(token) = token {
            builder = builder.header(CSRF_HEADER, token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        Ok(HttpReply {
            status,
            retry_after,
            body,
        })
    }
}
