//! primaflow-auth
//!
//! Anti-forgery token management: acquire, cache, and refresh the
//! short-lived token required on mutating calls. The cache is the one
//! piece of deliberately shared mutable state in the system; all access
//! goes through [`manager::TokenManager`], whose lock provides
//! single-flight fetching. Tokens live in process memory only.

pub mod error;
pub mod fetcher;
pub mod manager;
pub mod token;

pub use error::AuthError;
pub use fetcher::{HttpTokenFetcher, TokenFetcher};
pub use manager::{TokenManager, TokenStatus};
pub use token::SecurityToken;
