//! Core types for the Notifi SDK.
//!
//! This crate provides the transport-agnostic vocabulary shared by the SDK:
//! - `envelope`: GraphQL response envelope
//! - `models`: Result entities returned by Notifi operations
//! - `inputs`: Typed input payloads for operations
//! - `operation`: Static operation definitions
//! - `token`: Bearer token capabilities

pub mod envelope;
pub mod inputs;
pub mod models;
pub mod operation;
pub mod token;

pub use envelope::{Envelope, GraphQlError};
pub use operation::{EmptyPayload, Operation, OperationKind};
pub use token::{token_fn, Anonymous, FnTokenSource, MemoryTokenStore, TokenSink, TokenSource};
