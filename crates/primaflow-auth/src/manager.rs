use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::AuthError;
use crate::fetcher::TokenFetcher;
use crate::token::SecurityToken;

/// Refresh this far ahead of the hard expiry.
const DEFAULT_EXPIRY_MARGIN: SignedDuration = SignedDuration::from_secs(30);

#[derive(Debug, Default)]
struct CacheState {
    token: Option<SecurityToken>,
    last_error: Option<String>,
}

/// Read-only view of the cache for callers that only need to inspect.
#[derive(Debug, Clone)]
pub struct TokenStatus {
    pub has_token: bool,
    pub is_expired: bool,
    pub expires_at: Option<Timestamp>,
    pub last_error: Option<String>,
}

/// Caches one token for the session and shares a single in-flight fetch
/// among concurrent callers.
///
/// Single-flight falls out of the cache lock being held across the fetch
/// await: the first caller fetches, queued callers wake to a warm cache.
/// Constructed once and passed into the submission client — there is no
/// global instance.
pub struct TokenManager<F> {
    fetcher: Arc<F>,
    cache: Arc<Mutex<CacheState>>,
    margin: SignedDuration,
}

impl<F> Clone for TokenManager<F> {
    fn clone(&self) -> Self {
        TokenManager {
            fetcher: Arc::clone(&self.fetcher),
            cache: Arc::clone(&self.cache),
            margin: self.margin,
        }
    }
}

impl<F: TokenFetcher> TokenManager<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_margin(fetcher, DEFAULT_EXPIRY_MARGIN)
    }

    pub fn with_margin(fetcher: F, margin: SignedDuration) -> Self {
        TokenManager {
            fetcher: Arc::new(fetcher),
            cache: Arc::new(Mutex::new(CacheState::default())),
            margin,
        }
    }

    /// Return the cached token if it is still comfortably unexpired,
    /// otherwise fetch a fresh one.
    pub async fn ensure_token(&self) -> Result<SecurityToken, AuthError> {
        let mut cache = self.cache.lock().await;

        let now = Timestamp::now();
        if let Some(token) = &cache.token
            && !token.expires_within(now, self.margin)
        {
            return Ok(token.clone());
        }

        self.fetch_into(&mut cache).await
    }

    /// Force a re-fetch, replacing whatever is cached.
    pub async fn refresh(&self) -> Result<SecurityToken, AuthError> {
        let mut cache = self.cache.lock().await;
        info!("forcing anti-forgery token refresh");
        self.fetch_into(&mut cache).await
    }

    pub async fn status(&self) -> TokenStatus {
        let cache = self.cache.lock().await;
        let now = Timestamp::now();
        TokenStatus {
            has_token: cache.token.is_some(),
            is_expired: cache.token.as_ref().is_some_and(|t| t.is_expired(now)),
            expires_at: cache.token.as_ref().map(|t| t.expires_at),
            last_error: cache.last_error.clone(),
        }
    }

    async fn fetch_into(&self, cache: &mut CacheState) -> Result<SecurityToken, AuthError> {
        match self.fetcher.fetch().await {
            Ok(token) => {
                info!(expires_at = %token.expires_at, "anti-forgery token ready");
                cache.token = Some(token.clone());
                cache.last_error = None;
                Ok(token)
            }
            Err(e) => {
                // Fetch failure drops back to unfetched; the caller
                // decides whether to block or proceed unauthenticated.
                warn!(error = %e, "token fetch failed");
                cache.token = None;
                cache.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
