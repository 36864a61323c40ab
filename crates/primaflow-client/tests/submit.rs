use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use jiff::{SignedDuration, Timestamp};
use primaflow_auth::{AuthError, SecurityToken, TokenFetcher, TokenManager};
use primaflow_client::{
    HttpReply, RetryConfig, SubmissionClient, SubmissionError, SubmitRequest, Transport,
};
use primaflow_core::models::{AssessmentResponse, ContactInfo, ResponsePatch};

struct FakeFetcher {
    counter: Mutex<u32>,
    lifetime: SignedDuration,
}

impl FakeFetcher {
    fn long_lived() -> Self {
        FakeFetcher {
            counter: Mutex::new(0),
            lifetime: SignedDuration::from_secs(3600),
        }
    }

    fn short_lived() -> Self {
        FakeFetcher {
            counter: Mutex::new(0),
            lifetime: SignedDuration::from_secs(1),
        }
    }
}

impl TokenFetcher for FakeFetcher {
    async fn fetch(&self) -> Result<SecurityToken, AuthError> {
        let mut counter = self.counter.lock().unwrap();
        let n = *counter;
        *counter += 1;
        let now = Timestamp::now();
        Ok(SecurityToken {
            value: format!("token-{n}"),
            issued_at: now,
            expires_at: now
                .saturating_add(self.lifetime)
                .expect("SignedDuration arithmetic never errors"),
        })
    }
}

struct FailingFetcher;

impl TokenFetcher for FailingFetcher {
    async fn fetch(&self) -> Result<SecurityToken, AuthError> {
        Err(AuthError::Fetch("token endpoint down".into()))
    }
}

#[derive(Clone)]
struct FakeTransport {
    replies: Arc<Mutex<VecDeque<Result<HttpReply, SubmissionError>>>>,
    tokens_seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl FakeTransport {
    fn scripted(replies: Vec<Result<HttpReply, SubmissionError>>) -> Self {
        FakeTransport {
            replies: Arc::new(Mutex::new(replies.into())),
            tokens_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn attempts(&self) -> usize {
        self.tokens_seen.lock().unwrap().len()
    }

    fn token_for_attempt(&self, index: usize) -> Option<String> {
        self.tokens_seen.lock().unwrap()[index].clone()
    }
}

impl Transport for FakeTransport {
    async fn send(
        &self,
        _request: &SubmitRequest,
        token: Option<&str>,
    ) -> Result<HttpReply, SubmissionError> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.map(String::from));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted")
    }
}

fn ok_reply() -> Result<HttpReply, SubmissionError> {
    Ok(HttpReply {
        status: 200,
        retry_after: None,
        body: r#"{"success":true,"assessmentId":"a-1","leadId":"lead_42"}"#.into(),
    })
}

fn status_reply(status: u16) -> Result<HttpReply, SubmissionError> {
    Ok(HttpReply {
        status,
        retry_after: None,
        body: String::new(),
    })
}

fn request() -> SubmitRequest {
    let mut response = AssessmentResponse::default();
    response.apply(ResponsePatch {
        selected_condition_ids: Some(vec!["back-pain".into()]),
        sensations: Some(vec!["sharp".into()]),
        contact: Some(ContactInfo {
            name: "Jamie Doe".into(),
            email: "jamie@example.com".into(),
            phone: None,
        }),
        ..Default::default()
    });
    SubmitRequest::from_response(&response, Timestamp::now(), None).unwrap()
}

fn fast_config() -> RetryConfig {
    RetryConfig {
        base_delay: Duration::from_millis(1),
        ..Default::default()
    }
}

fn client_with(
    transport: &FakeTransport,
    config: RetryConfig,
) -> SubmissionClient<FakeTransport, FakeFetcher> {
    SubmissionClient::new(
        transport.clone(),
        TokenManager::new(FakeFetcher::long_lived()),
        config,
    )
}

#[tokio::test]
async fn success_on_first_attempt() {
    let transport = FakeTransport::scripted(vec![ok_reply()]);
    let client = client_with(&transport, fast_config());

    let ack = client.submit(&request()).await.unwrap();

    assert!(ack.success);
    assert_eq!(ack.assessment_id, "a-1");
    assert_eq!(ack.lead_id, "lead_42");
    assert_eq!(transport.attempts(), 1);
    assert_eq!(transport.token_for_attempt(0).as_deref(), Some("token-0"));
}

#[tokio::test]
async fn single_401_refreshes_once_and_replays() {
    let transport = FakeTransport::scripted(vec![status_reply(401), ok_reply()]);
    let client = client_with(&transport, fast_config());

    let ack = client.submit(&request()).await.unwrap();

    assert!(ack.success);
    assert_eq!(transport.attempts(), 2);
    // The replay carries the refreshed token, never the original header.
    assert_eq!(transport.token_for_attempt(0).as_deref(), Some("token-0"));
    assert_eq!(transport.token_for_attempt(1).as_deref(), Some("token-1"));
}

#[tokio::test]
async fn second_401_is_a_terminal_authentication_error() {
    let transport = FakeTransport::scripted(vec![status_reply(401), status_reply(401)]);
    let client = client_with(&transport, fast_config());

    let err = client.submit(&request()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Authentication(_)));
    // No looping: exactly the original attempt and one replay.
    assert_eq!(transport.attempts(), 2);
}

#[tokio::test]
async fn validation_failures_are_not_retried_and_carry_field_errors() {
    let transport = FakeTransport::scripted(vec![Ok(HttpReply {
        status: 422,
        retry_after: None,
        body: r#"{"success":false,"error":"Validation failed","code":"VALIDATION_ERROR","errors":{"email":"invalid format"}}"#.into(),
    })]);
    let client = client_with(&transport, fast_config());

    let err = client.submit(&request()).await.unwrap_err();

    match err {
        SubmissionError::Validation { message, errors } => {
            assert_eq!(message, "Validation failed");
            let errors = errors.unwrap();
            assert_eq!(errors["email"], "invalid format");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(transport.attempts(), 1);
}

#[tokio::test]
async fn transient_server_errors_retry_until_the_cap() {
    let transport = FakeTransport::scripted(vec![
        status_reply(500),
        status_reply(503),
        status_reply(500),
        status_reply(502),
    ]);
    let client = client_with(&transport, fast_config());

    let err = client.submit(&request()).await.unwrap_err();

    match err {
        SubmissionError::RetryExhausted { attempts, .. } => assert_eq!(attempts, 4),
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
    assert_eq!(transport.attempts(), 4);
}

#[tokio::test]
async fn transport_failure_is_retryable() {
    let transport = FakeTransport::scripted(vec![
        Err(SubmissionError::Transport("connection timed out".into())),
        ok_reply(),
    ]);
    let client = client_with(&transport, fast_config());

    let ack = client.submit(&request()).await.unwrap();
    assert!(ack.success);
    assert_eq!(transport.attempts(), 2);
}

#[tokio::test]
async fn rate_limit_honors_the_server_provided_delay() {
    let server_delay = Duration::from_millis(50);
    let transport = FakeTransport::scripted(vec![
        Ok(HttpReply {
            status: 429,
            retry_after: Some(server_delay),
            body: String::new(),
        }),
        ok_reply(),
    ]);
    let client = client_with(&transport, fast_config());

    let started = std::time::Instant::now();
    client.submit(&request()).await.unwrap();

    // The 1 ms backoff base would finish immediately; the observed wait
    // proves the Retry-After value won.
    assert!(started.elapsed() >= server_delay);
    assert_eq!(transport.attempts(), 2);
}

#[tokio::test]
async fn each_attempt_rereads_the_token_manager() {
    // Tokens outlive a single attempt but expire inside the refresh
    // margin, so every attempt fetches a fresh header value.
    let transport = FakeTransport::scripted(vec![status_reply(500), ok_reply()]);
    let client = SubmissionClient::new(
        transport.clone(),
        TokenManager::new(FakeFetcher::short_lived()),
        fast_config(),
    );

    client.submit(&request()).await.unwrap();

    assert_eq!(transport.token_for_attempt(0).as_deref(), Some("token-0"));
    assert_eq!(transport.token_for_attempt(1).as_deref(), Some("token-1"));
}

#[tokio::test]
async fn token_failure_blocks_submission_when_required() {
    let transport = FakeTransport::scripted(vec![]);
    let client = SubmissionClient::new(
        transport.clone(),
        TokenManager::new(FailingFetcher),
        fast_config(),
    );

    let err = client.submit(&request()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Token(_)));
    assert_eq!(transport.attempts(), 0);
}

#[tokio::test]
async fn token_failure_can_proceed_unauthenticated_when_configured() {
    let transport = FakeTransport::scripted(vec![ok_reply()]);
    let client = SubmissionClient::new(
        transport.clone(),
        TokenManager::new(FailingFetcher),
        RetryConfig {
            require_token: false,
            ..fast_config()
        },
    );

    let ack = client.submit(&request()).await.unwrap();

    assert!(ack.success);
    assert_eq!(transport.token_for_attempt(0), None);
}

#[test]
fn backoff_delays_are_strictly_increasing_up_to_the_cap() {
    let config = RetryConfig::default();

    let delays: Vec<Duration> = (1..config.max_attempts)
        .map(|attempt| config.backoff_delay(attempt))
        .collect();

    for pair in delays.windows(2) {
        assert!(pair[1] > pair[0], "backoff must strictly increase: {delays:?}");
    }
    assert_eq!(delays.first().copied(), Some(Duration::from_millis(500)));
}
