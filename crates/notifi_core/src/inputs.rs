//! Typed input payloads for Notifi operations.
//!
//! Each payload serializes to exactly the variables object its operation
//! declares: one camelCase key per GraphQL parameter.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSourceInput {
    pub name: String,
    pub blockchain_address: String,
    #[serde(rename = "type")]
    pub source_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSourceGroupInput {
    pub name: String,
    pub source_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSourceGroupInput {
    pub id: String,
    pub name: String,
    pub source_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteSourceGroupInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTargetGroupInput {
    pub name: String,
    pub email_target_ids: Vec<String>,
    pub sms_target_ids: Vec<String>,
    pub telegram_target_ids: Vec<String>,
}

/// Shared shape of the email, SMS and Telegram target mutations: `value` is
/// the address, phone number or Telegram handle respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTargetInput {
    pub name: String,
    pub value: String,
}

pub type CreateEmailTargetInput = CreateTargetInput;
pub type CreateSmsTargetInput = CreateTargetInput;
pub type CreateTelegramTargetInput = CreateTargetInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertInput {
    pub name: String,
    pub source_group_id: String,
    pub target_group_id: String,
    pub filter_id: String,
    pub filter_options: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAlertInput {
    pub id: String,
}

/// Signed login request from a DAO wallet. The signature is produced by the
/// caller's wallet over the other three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInFromDaoInput {
    pub wallet_public_key: String,
    pub dao_address: String,
    pub timestamp: i64,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInFromDappInput {
    pub wallet_public_key: String,
    pub dapp_address: String,
    pub timestamp: i64,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_in_from_dao_variables() {
        let input = LogInFromDaoInput {
            wallet_public_key: "wallet".to_string(),
            dao_address: "dao".to_string(),
            timestamp: 1650000000,
            signature: "sig".to_string(),
        };

        insta::assert_json_snapshot!(input, @r###"
        {
          "walletPublicKey": "wallet",
          "daoAddress": "dao",
          "timestamp": 1650000000,
          "signature": "sig"
        }
        "###);
    }

    #[test]
    fn test_create_alert_keeps_absent_options() {
        let input = CreateAlertInput {
            name: "Large transfers".to_string(),
            source_group_id: "sg1".to_string(),
            target_group_id: "tg1".to_string(),
            filter_id: "f1".to_string(),
            filter_options: None,
        };

        insta::assert_json_snapshot!(input, @r###"
        {
          "name": "Large transfers",
          "sourceGroupId": "sg1",
          "targetGroupId": "tg1",
          "filterId": "f1",
          "filterOptions": null
        }
        "###);
    }

    #[test]
    fn test_create_source_uses_type_key() {
        let input = CreateSourceInput {
            name: "Treasury".to_string(),
            blockchain_address: "addr".to_string(),
            source_type: "SOLANA_WALLET".to_string(),
        };

        let value = serde_json::to_value(&input).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["blockchainAddress", "name", "type"]);
    }
}
