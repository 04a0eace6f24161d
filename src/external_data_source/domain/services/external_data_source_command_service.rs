use async_trait::async_trait;

use crate::external_data_source::domain::model::{
    commands::{
        create_external_data_source_command::CreateExternalDataSourceCommand,
        edit_params_command::EditParamsCommand,
    },
    enums::external_data_source_domain_error::ExternalDataSourceDomainError,
    value_objects::data_source_id::DataSourceId,
};

#[async_trait]
pub trait ExternalDataSourceCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateExternalDataSourceCommand,
    ) -> Result<DataSourceId, ExternalDataSourceDomainError>;

    async fn handle_init(&self, id: &DataSourceId) -> Result<bool, ExternalDataSourceDomainError>;

    async fn handle_init_write(
        &self,
        id: &DataSourceId,
    ) -> Result<bool, ExternalDataSourceDomainError>;

    async fn handle_rerun(&self, id: &DataSourceId) -> Result<(), ExternalDataSourceDomainError>;

    async fn handle_edit_params(
        &self,
        id: &DataSourceId,
        command: EditParamsCommand,
    ) -> Result<(), ExternalDataSourceDomainError>;

    async fn handle_delete(&self, id: &DataSourceId) -> Result<(), ExternalDataSourceDomainError>;
}
