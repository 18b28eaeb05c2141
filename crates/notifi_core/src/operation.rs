//! Static operation definitions.

use serde::{de::DeserializeOwned, Serialize};

/// A Notifi GraphQL operation.
///
/// An operation is declarative: a fixed document, the name of the field the
/// result lives under in `data`, and the types of its variables and result.
///
/// # Example
///
/// ```ignore
/// use notifi_core::{EmptyPayload, Operation, OperationKind};
/// use notifi_core::models::SourceGroup;
///
/// struct GetSourceGroups;
///
/// impl Operation for GetSourceGroups {
///     type Variables = EmptyPayload;
///     type Output = Vec<SourceGroup>;
///
///     const KIND: OperationKind = OperationKind::Query;
///     const DOCUMENT: &'static str = "query getSourceGroups { sourceGroup { id name } }";
///     const RESULT_FIELD: &'static str = "sourceGroup";
/// }
/// ```
pub trait Operation {
    /// The variables object sent alongside the document.
    type Variables: Serialize + Send + Sync;

    /// The value decoded from `data[RESULT_FIELD]`.
    type Output: DeserializeOwned;

    const KIND: OperationKind;

    /// The GraphQL document.
    const DOCUMENT: &'static str;

    /// The key of the result inside the envelope's `data` object.
    const RESULT_FIELD: &'static str;
}

/// The kind of GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// Variables for operations that declare no parameters. Serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyPayload {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_empty_object() {
        let value = serde_json::to_value(EmptyPayload::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_operation_kind_str() {
        assert_eq!(OperationKind::Query.as_str(), "query");
        assert_eq!(OperationKind::Mutation.as_str(), "mutation");
    }
}
