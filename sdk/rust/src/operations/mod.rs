//! Notifi operation definitions.
//!
//! Each operation is a unit type implementing [`notifi_core::Operation`] plus
//! a plain async function that runs it through
//! [`make_authenticated_query`](crate::query::make_authenticated_query).

pub mod alert;
pub mod auth;
pub mod source;
pub mod target;

pub use alert::{create_alert, delete_alert, get_alerts, get_client_configuration, get_filters};
pub use auth::{log_in_from_dao, log_in_from_dapp, refresh_authorization};
pub use source::{
    create_source, create_source_group, delete_source_group, get_source_groups, get_sources,
    update_source_group,
};
pub use target::{
    create_email_target, create_sms_target, create_target_group, create_telegram_target,
    get_email_targets, get_sms_targets, get_target_groups, get_telegram_targets,
};

#[cfg(test)]
pub(crate) mod tests {
    use notifi_core::Operation;
    use serde::Serialize;
    use std::collections::BTreeSet;

    /// Parameter names declared in the document header (`$name: Type`).
    fn declared_params(document: &str) -> BTreeSet<String> {
        let header = document.split('{').next().unwrap_or_default();
        header
            .split('$')
            .skip(1)
            .filter_map(|decl| decl.split(':').next())
            .map(|name| name.trim().to_string())
            .collect()
    }

    fn variable_keys<V: Serialize>(variables: &V) -> BTreeSet<String> {
        serde_json::to_value(variables)
            .unwrap()
            .as_object()
            .expect("variables serialize to an object")
            .keys()
            .cloned()
            .collect()
    }

    /// Checks that an operation's document, kind, result field and variables
    /// agree with each other.
    pub(crate) fn assert_operation<Op: Operation>(sample: &Op::Variables) {
        let document = Op::DOCUMENT;

        assert!(
            document.starts_with(Op::KIND.as_str()),
            "{} does not start with `{}`",
            Op::RESULT_FIELD,
            Op::KIND.as_str()
        );
        assert!(
            document.contains(&format!("\n  {}", Op::RESULT_FIELD)),
            "document does not select `{}`",
            Op::RESULT_FIELD
        );
        assert_eq!(
            declared_params(document),
            variable_keys(sample),
            "variables of `{}` do not match its declared parameters",
            Op::RESULT_FIELD
        );
    }

    #[test]
    fn test_declared_params() {
        let params = declared_params("mutation m(\n  $a: String!\n  $bC: [ID!]!\n) {\n  m(a: $a) { id }\n}");
        let expected: BTreeSet<String> = ["a", "bC"].iter().map(|s| s.to_string()).collect();
        assert_eq!(params, expected);

        assert!(declared_params("query q {\n  q {\n    id\n  }\n}").is_empty());
    }
}
