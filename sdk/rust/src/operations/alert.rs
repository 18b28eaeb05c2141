//! Alerts, filters and client configuration.

use crate::error::NotifiResult;
use crate::query::execute;
use crate::transport::Transport;
use notifi_core::inputs::{CreateAlertInput, DeleteAlertInput};
use notifi_core::models::{Alert, ClientConfiguration, DeletedEntity, Filter};
use notifi_core::{EmptyPayload, Operation, OperationKind, TokenSource};

pub struct GetAlerts;

impl Operation for GetAlerts {
    type Variables = EmptyPayload;
    type Output = Vec<Alert>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getAlerts {
  alert {
    id
    name
    filterOptions
    sourceGroup {
      id
      name
    }
    targetGroup {
      id
      name
    }
    filter {
      id
      name
      filterType
    }
  }
}"#;
    const RESULT_FIELD: &'static str = "alert";
}

pub struct GetFilters;

impl Operation for GetFilters {
    type Variables = EmptyPayload;
    type Output = Vec<Filter>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getFilters {
  filter {
    id
    name
    filterType
  }
}"#;
    const RESULT_FIELD: &'static str = "filter";
}

pub struct GetClientConfiguration;

impl Operation for GetClientConfiguration {
    type Variables = EmptyPayload;
    type Output = ClientConfiguration;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getClientConfiguration {
  clientConfiguration {
    supportedSmsCountryCodes
  }
}"#;
    const RESULT_FIELD: &'static str = "clientConfiguration";
}

pub struct CreateAlert;

impl Operation for CreateAlert {
    type Variables = CreateAlertInput;
    type Output = Alert;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createAlert(
  $name: String!
  $sourceGroupId: String!
  $targetGroupId: String!
  $filterId: String!
  $filterOptions: String
) {
  createAlert(alertInput: {
    name: $name
    sourceGroupId: $sourceGroupId
    targetGroupId: $targetGroupId
    filterId: $filterId
    filterOptions: $filterOptions
  }) {
    id
    name
    filterOptions
    sourceGroup {
      id
      name
    }
    targetGroup {
      id
      name
    }
    filter {
      id
      name
      filterType
    }
  }
}"#;
    const RESULT_FIELD: &'static str = "createAlert";
}

pub struct DeleteAlert;

impl Operation for DeleteAlert {
    type Variables = DeleteAlertInput;
    type Output = DeletedEntity;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation deleteAlert(
  $id: String!
) {
  deleteAlert(alertId: $id) {
    id
  }
}"#;
    const RESULT_FIELD: &'static str = "deleteAlert";
}

pub async fn get_alerts<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<Alert>> {
    execute::<GetAlerts, _>(transport, tokens, &EmptyPayload::default()).await
}

/// Lists the filters alerts can be created with.
pub async fn get_filters<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<Filter>> {
    execute::<GetFilters, _>(transport, tokens, &EmptyPayload::default()).await
}

pub async fn get_client_configuration<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<ClientConfiguration> {
    execute::<GetClientConfiguration, _>(transport, tokens, &EmptyPayload::default()).await
}

pub async fn create_alert<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateAlertInput,
) -> NotifiResult<Alert> {
    execute::<CreateAlert, _>(transport, tokens, input).await
}

pub async fn delete_alert<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &DeleteAlertInput,
) -> NotifiResult<DeletedEntity> {
    execute::<DeleteAlert, _>(transport, tokens, input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::tests::assert_operation;

    #[test]
    fn test_alert_operations_are_consistent() {
        assert_operation::<GetAlerts>(&EmptyPayload::default());
        assert_operation::<GetFilters>(&EmptyPayload::default());
        assert_operation::<GetClientConfiguration>(&EmptyPayload::default());
        assert_operation::<CreateAlert>(&CreateAlertInput {
            name: "Large transfers".to_string(),
            source_group_id: "sg1".to_string(),
            target_group_id: "tg1".to_string(),
            filter_id: "f1".to_string(),
            filter_options: Some("{}".to_string()),
        });
        assert_operation::<DeleteAlert>(&DeleteAlertInput {
            id: "a1".to_string(),
        });
    }
}
