//! Entities returned by Notifi operations.
//!
//! Field names follow the service schema (camelCase on the wire). Only the
//! fields selected by the SDK's documents are modeled.

use serde::{Deserialize, Serialize};

/// A named group of sources that alerts are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceGroup {
    pub id: String,
    pub name: Option<String>,
}

/// An on-chain event source such as a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub source_type: String,
    pub blockchain_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTarget {
    pub id: String,
    pub name: Option<String>,
    pub email_address: String,
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsTarget {
    pub id: String,
    pub name: Option<String>,
    pub phone_number: String,
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramTarget {
    pub id: String,
    pub name: Option<String>,
    pub telegram_id: String,
    pub is_confirmed: bool,
    #[serde(default)]
    pub confirmation_url: Option<String>,
}

/// A set of delivery targets notified together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroup {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub email_targets: Vec<EmailTarget>,
    #[serde(default)]
    pub sms_targets: Vec<SmsTarget>,
    #[serde(default)]
    pub telegram_targets: Vec<TelegramTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub id: String,
    pub name: Option<String>,
    pub filter_type: String,
}

/// Binds a source group, a filter and a target group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub name: Option<String>,
    /// JSON-encoded filter options, passed through verbatim.
    #[serde(default)]
    pub filter_options: Option<String>,
    pub source_group: SourceGroup,
    pub target_group: TargetGroup,
    pub filter: Filter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfiguration {
    #[serde(default)]
    pub supported_sms_country_codes: Vec<String>,
}

/// A bearer token and its expiry timestamp (ISO-8601, as issued).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub token: String,
    pub expiry: String,
}

/// The account returned by dapp login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: Option<String>,
    pub email_confirmed: bool,
    #[serde(default)]
    pub authorization: Option<Authorization>,
}

/// Result of `logInFromDao`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoLogInResult {
    pub email: Option<String>,
    pub email_confirmed: bool,
    pub token: Option<String>,
}

/// Identifier echoed back by delete mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedEntity {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alert_from_wire() {
        let alert: Alert = serde_json::from_value(json!({
            "id": "a1",
            "name": "Large transfers",
            "filterOptions": "{\"threshold\":10}",
            "sourceGroup": { "id": "sg1", "name": "Wallets" },
            "targetGroup": {
                "id": "tg1",
                "name": "Ops",
                "emailTargets": [
                    { "id": "e1", "name": null, "emailAddress": "ops@example.com", "isConfirmed": true }
                ],
                "smsTargets": [],
                "telegramTargets": []
            },
            "filter": { "id": "f1", "name": "Balance", "filterType": "BALANCE" }
        }))
        .unwrap();

        assert_eq!(alert.source_group.id, "sg1");
        assert_eq!(alert.target_group.email_targets[0].email_address, "ops@example.com");
        assert_eq!(alert.filter.filter_type, "BALANCE");
        assert_eq!(alert.filter_options.as_deref(), Some("{\"threshold\":10}"));
    }

    #[test]
    fn test_source_type_rename() {
        let source: Source = serde_json::from_value(json!({
            "id": "s1",
            "name": null,
            "type": "SOLANA_WALLET",
            "blockchainAddress": "addr"
        }))
        .unwrap();

        assert_eq!(source.source_type, "SOLANA_WALLET");
        assert!(source.name.is_none());
    }

    #[test]
    fn test_target_group_lists_default_to_empty() {
        let group: TargetGroup =
            serde_json::from_value(json!({ "id": "tg1", "name": "Ops" })).unwrap();
        assert!(group.email_targets.is_empty());
        assert!(group.sms_targets.is_empty());
        assert!(group.telegram_targets.is_empty());
    }

    #[test]
    fn test_dao_login_result_with_null_token() {
        let result: DaoLogInResult = serde_json::from_value(json!({
            "email": null,
            "emailConfirmed": false,
            "token": null
        }))
        .unwrap();

        assert_eq!(
            result,
            DaoLogInResult {
                email: None,
                email_confirmed: false,
                token: None,
            }
        );
    }
}
