use async_trait::async_trait;

use crate::external_data_source::domain::model::{
    commands::edit_params_command::EditParamsCommand,
    entities::dataset::{DatasetRow, DatasetSchema},
    enums::external_data_source_domain_error::ExternalDataSourceDomainError,
};

/// Contract every external data source exposes to the dashboard platform.
///
/// `init` and `init_write` never fail: a job that could not be created is
/// reported as `false`. Everything else returns its error to the caller.
#[async_trait]
pub trait ExternalDataSource: Send + Sync {
    async fn init(&mut self) -> bool;

    async fn init_write(&mut self) -> bool;

    async fn get_schema(&self) -> Result<DatasetSchema, ExternalDataSourceDomainError>;

    async fn get_data(&self) -> Result<Vec<DatasetRow>, ExternalDataSourceDomainError>;

    async fn rerun(&self) -> Result<(), ExternalDataSourceDomainError>;

    fn edit_params(&mut self, command: EditParamsCommand);
}
