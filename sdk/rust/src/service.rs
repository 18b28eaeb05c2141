//! Convenience façade binding a transport and a token store.

use crate::config::ClientConfig;
use crate::error::NotifiResult;
use crate::operations;
use crate::transport::Transport;
use notifi_core::inputs::{
    CreateAlertInput, CreateEmailTargetInput, CreateSmsTargetInput, CreateSourceGroupInput,
    CreateSourceInput, CreateTargetGroupInput, CreateTelegramTargetInput, DeleteAlertInput,
    DeleteSourceGroupInput, LogInFromDaoInput, LogInFromDappInput, UpdateSourceGroupInput,
};
use notifi_core::models::{
    Alert, Authorization, ClientConfiguration, DaoLogInResult, DeletedEntity, EmailTarget, Filter,
    SmsTarget, Source, SourceGroup, TargetGroup, TelegramTarget, User,
};
use notifi_core::{MemoryTokenStore, TokenSink, TokenSource};
use std::sync::Arc;

/// Every Notifi operation as a method, sharing one transport and one token
/// store.
///
/// # Example
///
/// ```ignore
/// use notifi_sdk::{ClientConfig, NotifiService};
///
/// let service = NotifiService::connect(&ClientConfig::new("https://api.notifi.network/gql"))?;
/// service.log_in_from_dao(&payload).await?;
/// let groups = service.get_source_groups().await?;
/// ```
#[derive(Debug)]
pub struct NotifiService<S = MemoryTokenStore> {
    transport: Transport,
    tokens: Arc<S>,
}

impl<S> Clone for NotifiService<S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl NotifiService<MemoryTokenStore> {
    /// Builds a transport from `config` and starts with an empty in-memory
    /// token store.
    pub fn connect(config: &ClientConfig) -> NotifiResult<Self> {
        Ok(Self::new(
            Transport::new(config)?,
            Arc::new(MemoryTokenStore::new()),
        ))
    }
}

impl<S: TokenSource + TokenSink> NotifiService<S> {
    pub fn new(transport: Transport, tokens: Arc<S>) -> Self {
        Self { transport, tokens }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn tokens(&self) -> &Arc<S> {
        &self.tokens
    }

    // Authentication

    pub async fn log_in_from_dao(&self, input: &LogInFromDaoInput) -> NotifiResult<DaoLogInResult> {
        operations::log_in_from_dao(&self.transport, &*self.tokens, input).await
    }

    pub async fn log_in_from_dapp(&self, input: &LogInFromDappInput) -> NotifiResult<User> {
        operations::log_in_from_dapp(&self.transport, &*self.tokens, input).await
    }

    pub async fn refresh_authorization(&self) -> NotifiResult<Authorization> {
        operations::refresh_authorization(&self.transport, &*self.tokens).await
    }

    // Sources

    pub async fn get_source_groups(&self) -> NotifiResult<Vec<SourceGroup>> {
        operations::get_source_groups(&self.transport, &*self.tokens).await
    }

    pub async fn get_sources(&self) -> NotifiResult<Vec<Source>> {
        operations::get_sources(&self.transport, &*self.tokens).await
    }

    pub async fn create_source(&self, input: &CreateSourceInput) -> NotifiResult<Source> {
        operations::create_source(&self.transport, &*self.tokens, input).await
    }

    pub async fn create_source_group(
        &self,
        input: &CreateSourceGroupInput,
    ) -> NotifiResult<SourceGroup> {
        operations::create_source_group(&self.transport, &*self.tokens, input).await
    }

    pub async fn update_source_group(
        &self,
        input: &UpdateSourceGroupInput,
    ) -> NotifiResult<SourceGroup> {
        operations::update_source_group(&self.transport, &*self.tokens, input).await
    }

    pub async fn delete_source_group(
        &self,
        input: &DeleteSourceGroupInput,
    ) -> NotifiResult<DeletedEntity> {
        operations::delete_source_group(&self.transport, &*self.tokens, input).await
    }

    // Targets

    pub async fn get_target_groups(&self) -> NotifiResult<Vec<TargetGroup>> {
        operations::get_target_groups(&self.transport, &*self.tokens).await
    }

    pub async fn get_email_targets(&self) -> NotifiResult<Vec<EmailTarget>> {
        operations::get_email_targets(&self.transport, &*self.tokens).await
    }

    pub async fn get_sms_targets(&self) -> NotifiResult<Vec<SmsTarget>> {
        operations::get_sms_targets(&self.transport, &*self.tokens).await
    }

    pub async fn get_telegram_targets(&self) -> NotifiResult<Vec<TelegramTarget>> {
        operations::get_telegram_targets(&self.transport, &*self.tokens).await
    }

    pub async fn create_target_group(
        &self,
        input: &CreateTargetGroupInput,
    ) -> NotifiResult<TargetGroup> {
        operations::create_target_group(&self.transport, &*self.tokens, input).await
    }

    pub async fn create_email_target(
        &self,
        input: &CreateEmailTargetInput,
    ) -> NotifiResult<EmailTarget> {
        operations::create_email_target(&self.transport, &*self.tokens, input).await
    }

    pub async fn create_sms_target(&self, input: &CreateSmsTargetInput) -> NotifiResult<SmsTarget> {
        operations::create_sms_target(&self.transport, &*self.tokens, input).await
    }

    pub async fn create_telegram_target(
        &self,
        input: &CreateTelegramTargetInput,
    ) -> NotifiResult<TelegramTarget> {
        operations::create_telegram_target(&self.transport, &*self.tokens, input).await
    }

    // Alerts

    pub async fn get_alerts(&self) -> NotifiResult<Vec<Alert>> {
        operations::get_alerts(&self.transport, &*self.tokens).await
    }

    pub async fn get_filters(&self) -> NotifiResult<Vec<Filter>> {
        operations::get_filters(&self.transport, &*self.tokens).await
    }

    pub async fn get_client_configuration(&self) -> NotifiResult<ClientConfiguration> {
        operations::get_client_configuration(&self.transport, &*self.tokens).await
    }

    pub async fn create_alert(&self, input: &CreateAlertInput) -> NotifiResult<Alert> {
        operations::create_alert(&self.transport, &*self.tokens, input).await
    }

    pub async fn delete_alert(&self, input: &DeleteAlertInput) -> NotifiResult<DeletedEntity> {
        operations::delete_alert(&self.transport, &*self.tokens, input).await
    }
}
