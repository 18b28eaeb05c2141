//! Delivery targets (email, SMS, Telegram) and target groups.

use crate::error::NotifiResult;
use crate::query::execute;
use crate::transport::Transport;
use notifi_core::inputs::{
    CreateEmailTargetInput, CreateSmsTargetInput, CreateTargetGroupInput,
    CreateTelegramTargetInput,
};
use notifi_core::models::{EmailTarget, SmsTarget, TargetGroup, TelegramTarget};
use notifi_core::{EmptyPayload, Operation, OperationKind, TokenSource};

pub struct GetTargetGroups;

impl Operation for GetTargetGroups {
    type Variables = EmptyPayload;
    type Output = Vec<TargetGroup>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getTargetGroups {
  targetGroup {
    id
    name
    emailTargets {
      id
      name
      emailAddress
      isConfirmed
    }
    smsTargets {
      id
      name
      phoneNumber
      isConfirmed
    }
    telegramTargets {
      id
      name
      telegramId
      isConfirmed
      confirmationUrl
    }
  }
}"#;
    const RESULT_FIELD: &'static str = "targetGroup";
}

pub struct GetEmailTargets;

impl Operation for GetEmailTargets {
    type Variables = EmptyPayload;
    type Output = Vec<EmailTarget>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getEmailTargets {
  emailTarget {
    id
    name
    emailAddress
    isConfirmed
  }
}"#;
    const RESULT_FIELD: &'static str = "emailTarget";
}

pub struct GetSmsTargets;

impl Operation for GetSmsTargets {
    type Variables = EmptyPayload;
    type Output = Vec<SmsTarget>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getSmsTargets {
  smsTarget {
    id
    name
    phoneNumber
    isConfirmed
  }
}"#;
    const RESULT_FIELD: &'static str = "smsTarget";
}

pub struct GetTelegramTargets;

impl Operation for GetTelegramTargets {
    type Variables = EmptyPayload;
    type Output = Vec<TelegramTarget>;

    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query getTelegramTargets {
  telegramTarget {
    id
    name
    telegramId
    isConfirmed
    confirmationUrl
  }
}"#;
    const RESULT_FIELD: &'static str = "telegramTarget";
}

pub struct CreateTargetGroup;

impl Operation for CreateTargetGroup {
    type Variables = CreateTargetGroupInput;
    type Output = TargetGroup;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createTargetGroup(
  $name: String!
  $emailTargetIds: [String!]!
  $smsTargetIds: [String!]!
  $telegramTargetIds: [String!]!
) {
  createTargetGroup(targetGroupInput: {
    name: $name
    emailTargetIds: $emailTargetIds
    smsTargetIds: $smsTargetIds
    telegramTargetIds: $telegramTargetIds
  }) {
    id
    name
    emailTargets {
      id
      name
      emailAddress
      isConfirmed
    }
    smsTargets {
      id
      name
      phoneNumber
      isConfirmed
    }
    telegramTargets {
      id
      name
      telegramId
      isConfirmed
      confirmationUrl
    }
  }
}"#;
    const RESULT_FIELD: &'static str = "createTargetGroup";
}

pub struct CreateEmailTarget;

impl Operation for CreateEmailTarget {
    type Variables = CreateEmailTargetInput;
    type Output = EmailTarget;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createEmailTarget(
  $name: String!
  $value: String!
) {
  createEmailTarget(createTargetInput: {
    name: $name
    value: $value
  }) {
    id
    name
    emailAddress
    isConfirmed
  }
}"#;
    const RESULT_FIELD: &'static str = "createEmailTarget";
}

pub struct CreateSmsTarget;

impl Operation for CreateSmsTarget {
    type Variables = CreateSmsTargetInput;
    type Output = SmsTarget;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createSmsTarget(
  $name: String!
  $value: String!
) {
  createSmsTarget(createTargetInput: {
    name: $name
    value: $value
  }) {
    id
    name
    phoneNumber
    isConfirmed
  }
}"#;
    const RESULT_FIELD: &'static str = "createSmsTarget";
}

pub struct CreateTelegramTarget;

impl Operation for CreateTelegramTarget {
    type Variables = CreateTelegramTargetInput;
    type Output = TelegramTarget;

    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation createTelegramTarget(
  $name: String!
  $value: String!
) {
  createTelegramTarget(createTargetInput: {
    name: $name
    value: $value
  }) {
    id
    name
    telegramId
    isConfirmed
    confirmationUrl
  }
}"#;
    const RESULT_FIELD: &'static str = "createTelegramTarget";
}

pub async fn get_target_groups<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<TargetGroup>> {
    execute::<GetTargetGroups, _>(transport, tokens, &EmptyPayload::default()).await
}

pub async fn get_email_targets<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<EmailTarget>> {
    execute::<GetEmailTargets, _>(transport, tokens, &EmptyPayload::default()).await
}

pub async fn get_sms_targets<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<SmsTarget>> {
    execute::<GetSmsTargets, _>(transport, tokens, &EmptyPayload::default()).await
}

pub async fn get_telegram_targets<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
) -> NotifiResult<Vec<TelegramTarget>> {
    execute::<GetTelegramTargets, _>(transport, tokens, &EmptyPayload::default()).await
}

/// Creates a target group from existing target ids.
pub async fn create_target_group<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateTargetGroupInput,
) -> NotifiResult<TargetGroup> {
    execute::<CreateTargetGroup, _>(transport, tokens, input).await
}

/// Registers an email address. `input.value` is the address.
pub async fn create_email_target<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateEmailTargetInput,
) -> NotifiResult<EmailTarget> {
    execute::<CreateEmailTarget, _>(transport, tokens, input).await
}

/// Registers a phone number. `input.value` is the number in E.164 form.
pub async fn create_sms_target<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateSmsTargetInput,
) -> NotifiResult<SmsTarget> {
    execute::<CreateSmsTarget, _>(transport, tokens, input).await
}

pub async fn create_telegram_target<T: TokenSource + ?Sized>(
    transport: &Transport,
    tokens: &T,
    input: &CreateTelegramTargetInput,
) -> NotifiResult<TelegramTarget> {
    execute::<CreateTelegramTarget, _>(transport, tokens, input).await
}
