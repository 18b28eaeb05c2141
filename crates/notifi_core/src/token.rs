//! Bearer token capabilities.
//!
//! The token lifecycle is split into two injected capabilities: reading the
//! current credential ([`TokenSource`]) and persisting a newly issued one
//! ([`TokenSink`]). Operations receive them as parameters; nothing in the
//! SDK holds a token globally.
//!
//! # Example
//!
//! ```ignore
//! use notifi_core::token::{token_fn, MemoryTokenStore, TokenSink, TokenSource};
//!
//! let store = MemoryTokenStore::new();
//! store.set_token(Some("jwt".into())).await;
//! assert_eq!(store.get_token().await.as_deref(), Some("jwt"));
//!
//! let fixed = token_fn(|| async { Some("jwt".to_string()) });
//! ```

use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Yields the current bearer token, if any.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn get_token(&self) -> Option<String>;
}

/// Persists a token issued by the service. `None` clears the stored token.
#[async_trait]
pub trait TokenSink: Send + Sync {
    async fn set_token(&self, token: Option<String>);
}

#[async_trait]
impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    async fn get_token(&self) -> Option<String> {
        (**self).get_token().await
    }
}

#[async_trait]
impl<T: TokenSink + ?Sized> TokenSink for Arc<T> {
    async fn set_token(&self, token: Option<String>) {
        (**self).set_token(token).await
    }
}

#[async_trait]
impl<T: TokenSource + ?Sized> TokenSource for &T {
    async fn get_token(&self) -> Option<String> {
        (**self).get_token().await
    }
}

#[async_trait]
impl<T: TokenSink + ?Sized> TokenSink for &T {
    async fn set_token(&self, token: Option<String>) {
        (**self).set_token(token).await
    }
}

/// A source that never has a token. Requests made with it carry no
/// `Authorization` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait]
impl TokenSource for Anonymous {
    async fn get_token(&self) -> Option<String> {
        None
    }
}

/// Adapts an async closure into a [`TokenSource`]. See [`token_fn`].
#[derive(Clone)]
pub struct FnTokenSource<F> {
    f: F,
}

/// Wraps `f` so that each `get_token` call awaits `f()`.
pub fn token_fn<F, Fut>(f: F) -> FnTokenSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Option<String>> + Send + 'static,
{
    FnTokenSource { f }
}

#[async_trait]
impl<F, Fut> TokenSource for FnTokenSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Option<String>> + Send + 'static,
{
    async fn get_token(&self) -> Option<String> {
        (self.f)().await
    }
}

impl<F> fmt::Debug for FnTokenSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTokenSource").finish_non_exhaustive()
    }
}

/// In-process token holder implementing both capabilities.
///
/// Concurrent refreshes are not coordinated: the last `set_token` wins.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenSource for MemoryTokenStore {
    async fn get_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[async_trait]
impl TokenSink for MemoryTokenStore {
    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

// Never print the credential itself.
impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_token = self.token.try_read().map(|t| t.is_some()).ok();
        f.debug_struct("MemoryTokenStore")
            .field("has_token", &has_token)
            .finish()
    }
}
