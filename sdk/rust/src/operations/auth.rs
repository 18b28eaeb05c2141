//! Login and token refresh.
//!
//! These operations persist the credential they receive through a
//! [`TokenSink`] once the call has succeeded. On any failure the sink is
//! left untouched.

use crate::error::NotifiResult;
use crate::query::execute;
use crate::transport::Transport;
use notifi_core::inputs::{LogInFromDaoInput, LogInFromDappInput};
use notifi_core::models::{Authorization, DaoLogInResult, User};
use notifi_core::{Anonymous, EmptyPayload, Operation, OperationKind, TokenSink, TokenSource};
use tracing::debug;

pub struct LogInFromDao;

impl Operation for LogInFromDao {
    type Variables = LogInFromDaoInput;
    type Output = DaoLogInResult;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation logInFromDao(
  $walletPublicKey: String!
  $daoAddress: String!
  $timestamp: Long!
  $signature: String!
) {
  logInFromDao(daoLogInInput: {
    walletPublicKey: $walletPublicKey
    daoAddress: $daoAddress
    timestamp: $timestamp
  }, signature: $signature) {
    email
    emailConfirmed
    token
  }
}"#;
    const RESULT_FIELD: &'static str = "logInFromDao";
}

pub struct LogInFromDapp;

impl Operation for LogInFromDapp {
    type Variables = LogInFromDappInput;
    type Output = User;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation logInFromDapp(
  $walletPublicKey: String!
  $dappAddress: String!
  $timestamp: Long!
  $signature: String!
) {
  logInFromDapp(dappLogInInput: {
    walletPublicKey: $walletPublicKey
    dappAddress: $dappAddress
    timestamp: $timestamp
  }, signature: $signature) {
    email
    emailConfirmed
    authorization {
      token
      expiry
    }
  }
}"#;
    const RESULT_FIELD: &'static str = "logInFromDapp";
}

pub struct RefreshAuthorization;

impl Operation for RefreshAuthorization {
    type Variables = EmptyPayload;
    type Output = Authorization;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation refreshAuthorization {
  refreshAuthorization {
    token
    expiry
  }
}"#;
    const RESULT_FIELD: &'static str = "refreshAuthorization";
}

/// Logs in with a DAO wallet signature and persists the issued token.
///
/// The request is sent without an `Authorization` header. The sink receives
/// `result.token` as returned, including `None`.
pub async fn log_in_from_dao<S: TokenSink + ?Sized>(
    transport: &Transport,
    sink: &S,
    input: &LogInFromDaoInput,
) -> NotifiResult<DaoLogInResult> {
    let result = execute::<LogInFromDao, _>(transport, &Anonymous, input).await?;

    debug!(
        has_token = result.token.is_some(),
        "Persisting token from logInFromDao"
    );
    sink.set_token(result.token.clone()).await;

    Ok(result)
}

/// Logs in with a dapp wallet signature and persists the issued token.
///
/// The sink is only called when the user carries an `authorization`; a
/// login without one leaves the stored token untouched.
pub async fn log_in_from_dapp<S: TokenSink + ?Sized>(
    transport: &Transport,
    sink: &S,
    input: &LogInFromDappInput,
) -> NotifiResult<User> {
    let user = execute::<LogInFromDapp, _>(transport, &Anonymous, input).await?;

    match &user.authorization {
        Some(authorization) => {
            debug!(expiry = %authorization.expiry, "Persisting token from logInFromDapp");
            sink.set_token(Some(authorization.token.clone())).await;
        }
        None => debug!("logInFromDapp returned no authorization"),
    }

    Ok(user)
}

/// Exchanges the current token for a fresh one and stores it.
pub async fn refresh_authorization<S>(
    transport: &Transport,
    store: &S,
) -> NotifiResult<Authorization>
where
    S: TokenSource + TokenSink + ?Sized,
{
    let authorization =
        execute::<RefreshAuthorization, _>(transport, store, &EmptyPayload::default()).await?;

    debug!(expiry = %authorization.expiry, "Persisting refreshed token");
    store.set_token(Some(authorization.token.clone())).await;

    Ok(authorization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::tests::assert_operation;

    #[test]
    fn test_auth_operations_are_consistent() {
        assert_operation::<LogInFromDao>(&LogInFromDaoInput {
            wallet_public_key: "wallet".to_string(),
            dao_address: "dao".to_string(),
            timestamp: 1650000000,
            signature: "sig".to_string(),
        });
        assert_operation::<LogInFromDapp>(&LogInFromDappInput {
            wallet_public_key: "wallet".to_string(),
            dapp_address: "dapp".to_string(),
            timestamp: 1650000000,
            signature: "sig".to_string(),
        });
        assert_operation::<RefreshAuthorization>(&EmptyPayload::default());
    }
}
