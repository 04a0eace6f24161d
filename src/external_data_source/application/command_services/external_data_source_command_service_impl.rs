use std::sync::Arc;

use async_trait::async_trait;

use crate::external_data_source::{
    application::acl::otlrw_data_source_impl::OtlrwDataSourceImpl,
    domain::{
        model::{
            commands::{
                create_external_data_source_command::CreateExternalDataSourceCommand,
                edit_params_command::EditParamsCommand,
            },
            enums::external_data_source_domain_error::ExternalDataSourceDomainError,
            value_objects::data_source_id::DataSourceId,
        },
        services::external_data_source_command_service::ExternalDataSourceCommandService,
    },
    infrastructure::persistence::repositories::data_source_instance_repository::DataSourceInstanceRepository,
    interfaces::acl::{
        interaction_system_facade::InteractionSystemFacade,
        otp_connector_facade::{OtpConnectorFactory, OtpConnectorSettings},
    },
};

pub struct ExternalDataSourceCommandServiceImpl {
    repository: Arc<dyn DataSourceInstanceRepository>,
    interaction_system: Arc<dyn InteractionSystemFacade>,
    connector_factory: Arc<dyn OtpConnectorFactory>,
    connector_settings: OtpConnectorSettings,
}

impl ExternalDataSourceCommandServiceImpl {
    pub fn new(
        repository: Arc<dyn DataSourceInstanceRepository>,
        interaction_system: Arc<dyn InteractionSystemFacade>,
        connector_factory: Arc<dyn OtpConnectorFactory>,
        connector_settings: OtpConnectorSettings,
    ) -> Self {
        Self {
            repository,
            interaction_system,
            connector_factory,
            connector_settings,
        }
    }
}

#[async_trait]
impl ExternalDataSourceCommandService for ExternalDataSourceCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateExternalDataSourceCommand,
    ) -> Result<DataSourceId, ExternalDataSourceDomainError> {
        let data_source = OtlrwDataSourceImpl::new(
            command,
            self.interaction_system.as_ref(),
            self.connector_factory.as_ref(),
            &self.connector_settings,
        );
        let id = data_source.id();

        self.repository.save(id, Box::new(data_source)).await;
        tracing::info!(data_source_id = %id.as_string(), "External data source created");

        Ok(id)
    }

    async fn handle_init(&self, id: &DataSourceId) -> Result<bool, ExternalDataSourceDomainError> {
        let data_source = self.repository.find_by_id(id).await?;
        let mut guard = data_source.lock().await;
        Ok(guard.init().await)
    }

    async fn handle_init_write(
        &self,
        id: &DataSourceId,
    ) -> Result<bool, ExternalDataSourceDomainError> {
        let data_source = self.repository.find_by_id(id).await?;
        let mut guard = data_source.lock().await;
        Ok(guard.init_write().await)
    }

    async fn handle_rerun(&self, id: &DataSourceId) -> Result<(), ExternalDataSourceDomainError> {
        let data_source = self.repository.find_by_id(id).await?;
        let guard = data_source.lock().await;
        guard.rerun().await
    }

    async fn handle_edit_params(
        &self,
        id: &DataSourceId,
        command: EditParamsCommand,
    ) -> Result<(), ExternalDataSourceDomainError> {
        let data_source = self.repository.find_by_id(id).await?;
        let mut guard = data_source.lock().await;
        guard.edit_params(command);
        Ok(())
    }

    async fn handle_delete(&self, id: &DataSourceId) -> Result<(), ExternalDataSourceDomainError> {
        self.repository.delete(id).await?;
        tracing::info!(data_source_id = %id.as_string(), "External data source removed");
        Ok(())
    }
}
