//! Access-token acquisition.
//!
//! Every outgoing submission carries a bearer token. Rather than hiding a
//! token cache in module state next to the transport, the provider is an
//! injected dependency: forms see only the [`TokenProvider`] trait, and
//! the caching policy is an explicit decorator with an explicit TTL.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// How long a fetched token is reused before a refresh is attempted.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// No session: the user must sign in before submitting anything.
    #[error("no active session")]
    NotAuthenticated,

    /// The identity provider could not mint a token.
    #[error("token refresh failed: {0}")]
    Refresh(String),
}

/// Source of bearer tokens for authorized calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, TokenError>;
}

#[async_trait]
impl<P: TokenProvider + ?Sized> TokenProvider for Arc<P> {
    async fn access_token(&self) -> Result<String, TokenError> {
        (**self).access_token().await
    }
}

struct CachedToken {
    token: String,
    fetched_at: Instant,
}

/// TTL-caching decorator around any [`TokenProvider`].
///
/// A cached token is served until the TTL elapses, then a refresh is
/// attempted. When the refresh fails but a previous token is still on
/// hand, the stale token is served instead of surfacing the failure;
/// the backend remains the final judge of token validity.
pub struct CachedTokenProvider<P> {
    inner: P,
    ttl: Duration,
    state: Mutex<Option<CachedToken>>,
}

impl<P: TokenProvider> CachedTokenProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_TOKEN_TTL)
    }

    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            state: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<P: TokenProvider> TokenProvider for CachedTokenProvider<P> {
    async fn access_token(&self) -> Result<String, TokenError> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.token.clone());
            }
        }

        match self.inner.access_token().await {
            Ok(token) => {
                debug!("access token refreshed");
                *state = Some(CachedToken {
                    token: token.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(token)
            }
            Err(err) => match state.as_ref() {
                Some(cached) => {
                    warn!(error = %err, "token refresh failed, serving cached token");
                    Ok(cached.token.clone())
                }
                None => Err(err),
            },
        }
    }
}
