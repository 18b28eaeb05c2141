//! GraphQL response envelope.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The top-level JSON object returned by the GraphQL endpoint.
///
/// Both members are optional on the wire: a server may answer with `data`
/// only, `errors` only, both, or an explicit `null` for either.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl Envelope {
    /// Removes and returns `data[field]`.
    ///
    /// Returns `None` when `data` is absent, the key is missing, or the value
    /// is JSON `null`.
    pub fn take_field(&mut self, field: &str) -> Option<Value> {
        self.data
            .as_mut()?
            .remove(field)
            .filter(|value| !value.is_null())
    }

    /// Takes the error list, leaving `None` behind.
    pub fn take_errors(&mut self) -> Vec<GraphQlError> {
        self.errors.take().unwrap_or_default()
    }
}

/// A single entry of the envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    #[serde(default)]
    pub extensions: Option<HashMap<String, Value>>,
}
