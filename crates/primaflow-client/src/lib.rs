//! primaflow-client
//!
//! The submission client: serializes the finished response into the
//! backend contract and delivers it with bounded retries, status-driven
//! recovery, and a fresh anti-forgery header on every attempt.

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod transport;

pub use client::SubmissionClient;
pub use config::RetryConfig;
pub use error::SubmissionError;
pub use payload::{AssessmentData, Metadata, SubmitAck, SubmitRequest};
pub use transport::{HttpReply, HttpTransport, Transport};
