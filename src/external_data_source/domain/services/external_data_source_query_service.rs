use async_trait::async_trait;

use crate::external_data_source::domain::model::{
    entities::dataset::{DatasetRow, DatasetSchema},
    enums::external_data_source_domain_error::ExternalDataSourceDomainError,
    value_objects::{
        data_source_id::DataSourceId,
        plugin_registration_meta::{ExtensionInfo, PluginRegistrationMeta},
    },
};

#[async_trait]
pub trait ExternalDataSourceQueryService: Send + Sync {
    async fn handle_get_schema(
        &self,
        id: &DataSourceId,
    ) -> Result<DatasetSchema, ExternalDataSourceDomainError>;

    async fn handle_get_data(
        &self,
        id: &DataSourceId,
    ) -> Result<Vec<DatasetRow>, ExternalDataSourceDomainError>;

    fn handle_extension_info(&self) -> (ExtensionInfo, PluginRegistrationMeta);
}
