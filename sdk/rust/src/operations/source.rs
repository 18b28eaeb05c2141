//! Sources and source groups.

use crate::error::NotifiResult;
use crate::query::execute;
use crate::transport::Transport;
use notifi_core::inputs::{
    CreateSourceGroupInput, CreateSourceInput, DeleteSourceGroupInput, UpdateSourceGroupInput,
};
use notifi_core::models::{DeletedEntity, Source, SourceGroup};
use notifi_core::{EmptyPayload, Operation, OperationKind, TokenSource};

pub struct GetSourceGroups;

impl Operation for GetSourceGroups {
    type Variables = EmptyPayload;
    type Output = Vec<SourceGroup>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getSourceGroups {
  sourceGroup {
    id
    name
  }
}"#;
    const RESULT_FIELD: &'static str = "sourceGroup";
}

pub struct GetSources;

impl Operation for GetSources {
    type Variables = EmptyPayload;
    type Output = Vec<Source>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getSources {
  source {
    id
    name
    type
    blockchainAddress
  }
}"#;
    const RESULT_FIELD: &'static str = "source";
}

pub struct CreateSource;

impl Operation for CreateSource {
    type Variables = CreateSourceInput;
    type Output = Source;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createSource(
  $name: String!
  $blockchainAddress: String!
  $type: SourceType!
) {
  createSource(createSourceInput: {
    name: $name
    blockchainAddress: $blockchainAddress
    type: $type
  }) {
    id
    name
    type
    blockchainAddress
  }
}"#;
    const RESULT_FIELD: &'static str = "createSource";
}

pub struct CreateSourceGroup;

impl Operation for CreateSourceGroup {
    type Variables = CreateSourceGroupInput;
    type Output = SourceGroup;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createSourceGroup(
  $name: String!
  $sourceIds: [String!]!
) {
  createSourceGroup(sourceGroupInput: {
    name: $name
    sourceIds: $sourceIds
  }) {
    id
    name
  }
}"#;
    const RESULT_FIELD: &'static str = "createSourceGroup";
}

pub struct UpdateSourceGroup;

impl Operation for UpdateSourceGroup {
    type Variables = UpdateSourceGroupInput;
    type Output = SourceGroup;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation updateSourceGroup(
  $id: String!
  $name: String!
  $sourceIds: [String!]!
) {
  updateSourceGroup(sourceGroupInput: {
    id: $id
    name: $name
    sourceIds: $sourceIds
  }) {
    id
    name
  }
}"#;
    const RESULT_FIELD: &'static str = "updateSourceGroup";
}

pub struct DeleteSourceGroup;

impl Operation for DeleteSourceGroup {
    type Variables = DeleteSourceGroupInput;
    type Output = DeletedEntity;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation deleteSourceGroup(
  $id: String!
) {
  deleteSourceGroup(sourceGroupInput: {
    id: $id
  }) {
    id
  }
}"#;
    const RESULT_FIELD: &'static str = "deleteSourceGroup";
}

/// Lists the caller's source groups.
pub async fn get_source_groups<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<SourceGroup>> {
    execute::<GetSourceGroups, _>(transport, tokens, &EmptyPayload::default()).await
}

/// Lists the caller's sources.
pub async fn get_sources<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<Source>> {
    execute::<GetSources, _>(transport, tokens, &EmptyPayload::default()).await
}

pub async fn create_source<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateSourceInput,
) -> NotifiResult<Source> {
    execute::<CreateSource, _>(transport, tokens, input).await
}

pub async fn create_source_group<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateSourceGroupInput,
) -> NotifiResult<SourceGroup> {
    execute::<CreateSourceGroup, _>(transport, tokens, input).await
}

/// Replaces the name and member sources of an existing group.
pub async fn update_source_group<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &UpdateSourceGroupInput,
) -> NotifiResult<SourceGroup> {
    execute::<UpdateSourceGroup, _>(transport, tokens, input).await
}

pub async fn delete_source_group<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &DeleteSourceGroupInput,
) -> NotifiResult<DeletedEntity> {
    execute::<DeleteSourceGroup, _>(transport, tokens, input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::tests::assert_operation;

    #[test]
    fn test_source_operations_are_consistent() {
        assert_operation::<GetSourceGroups>(&EmptyPayload::default());
        assert_operation::<GetSources>(&EmptyPayload::default());
        assert_operation::<CreateSource>(&CreateSourceInput {
            name: "Treasury".to_string(),
            blockchain_address: "addr".to_string(),
            source_type: "SOLANA_WALLET".to_string(),
        });
        assert_operation::<CreateSourceGroup>(&CreateSourceGroupInput {
            name: "Wallets".to_string(),
            source_ids: vec!["s1".to_string()],
        });
        assert_operation::<UpdateSourceGroup>(&UpdateSourceGroupInput {
            id: "sg1".to_string(),
            name: "Wallets".to_string(),
            source_ids: vec![],
        });
        assert_operation::<DeleteSourceGroup>(&DeleteSourceGroupInput {
            id: "sg1".to_string(),
        });
    }

    #[test]
    fn test_source_group_document() {
        assert_eq!(
            GetSourceGroups::DOCUMENT,
            "query getSourceGroups {\n  sourceGroup {\n    id\n    name\n  }\n}"
        );
    }
}
