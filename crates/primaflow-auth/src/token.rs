use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// A short-lived anti-forgery token. Held in process memory for the
/// session; never written to durable storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityToken {
    pub value: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl SecurityToken {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }

    /// True when the token expires within `margin` of `now`. Used to
    /// refresh slightly ahead of the hard expiry so an attempt never
    /// carries a token that dies in flight.
    pub fn expires_within(&self, now: Timestamp, margin: SignedDuration) -> bool {
        self.expires_at
            <= now
                .saturating_add(margin)
                .expect("SignedDuration arithmetic never errors")
    }
}
