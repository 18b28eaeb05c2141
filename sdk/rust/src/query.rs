//! Authenticated query execution.
//!
//! Every Notifi operation runs through [`make_authenticated_query`]: obtain
//! the current token, POST the document once, then extract and decode the
//! result field from the envelope.

use crate::error::{NotifiError, NotifiResult};
use crate::transport::Transport;
use notifi_core::{Operation, TokenSource};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// Executes one GraphQL document with bearer authentication.
///
/// Fails with [`NotifiError::NoData`] when `data` or `data[result_field]` is
/// absent or null. Transport failures are returned unchanged.
pub async fn make_authenticated_query<T, V, R>(
    transport: &Transport,
    tokens: &T,
    variables: &V,
    query: &str,
    result_field: &str,
) -> NotifiResult<R>
where
    T: TokenSource + ?Sized,
    V: Serialize,
    R: DeserializeOwned,
{
    let token = tokens.get_token().await;
    let mut envelope = transport
        .post_graphql(query, variables, token.as_deref())
        .await?;

    let Some(value) = envelope.take_field(result_field) else {
        let errors = envelope.take_errors();
        warn!(
            field = result_field,
            errors = errors.len(),
            "No data returned from notifi"
        );
        return Err(NotifiError::no_data(result_field, errors));
    };

    serde_json::from_value(value).map_err(|source| NotifiError::Decode {
        field: result_field.to_string(),
        source,
    })
}

/// Executes a statically defined [`Operation`].
pub async fn execute<Op, T>(
    transport: &Transport,
    tokens: &T,
    variables: &Op::Variables,
) -> NotifiResult<Op::Output>
where
    Op: Operation,
    T: TokenSource + ?Sized,
{
    make_authenticated_query(transport, tokens, variables, Op::DOCUMENT, Op::RESULT_FIELD).await
}
