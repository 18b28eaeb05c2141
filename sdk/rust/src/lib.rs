//! Notifi SDK
//!
//! This crate wraps the Notifi GraphQL API: an authenticated-query executor
//! and typed operations built on it.
//!
//! # Operations
//!
//! ```ignore
//! use notifi_sdk::{operations, ClientConfig, MemoryTokenStore, Transport};
//!
//! let transport = Transport::new(&ClientConfig::new("https://api.notifi.network/gql"))?;
//! let tokens = MemoryTokenStore::new();
//!
//! operations::log_in_from_dao(&transport, &tokens, &payload).await?;
//! let groups = operations::get_source_groups(&transport, &tokens).await?;
//! ```
//!
//! # Raw documents
//!
//! ```ignore
//! use notifi_sdk::query::make_authenticated_query;
//!
//! let groups: Vec<SourceGroup> = make_authenticated_query(
//!     &transport,
//!     &tokens,
//!     &EmptyPayload::default(),
//!     "query getSourceGroups { sourceGroup { id name } }",
//!     "sourceGroup",
//! )
//! .await?;
//! ```

pub mod config;
pub mod error;
pub mod operations;
pub mod query;
pub mod service;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ErrorCode, NotifiError, NotifiResult};
pub use query::{execute, make_authenticated_query};
pub use service::NotifiService;
pub use transport::Transport;

// Re-export core types that appear in every signature
pub use notifi_core::inputs;
pub use notifi_core::models;
pub use notifi_core::{
    token_fn, Anonymous, EmptyPayload, Envelope, GraphQlError, MemoryTokenStore, Operation,
    OperationKind, TokenSink, TokenSource,
};
