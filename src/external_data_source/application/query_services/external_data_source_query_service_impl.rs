use std::sync::Arc;

use async_trait::async_trait;

use crate::external_data_source::{
    application::acl::otlrw_data_source_impl::OtlrwDataSourceImpl,
    domain::{
        model::{
            entities::dataset::{DatasetRow, DatasetSchema},
            enums::external_data_source_domain_error::ExternalDataSourceDomainError,
            value_objects::{
                data_source_id::DataSourceId,
                plugin_registration_meta::{ExtensionInfo, PluginRegistrationMeta},
            },
        },
        services::external_data_source_query_service::ExternalDataSourceQueryService,
    },
    infrastructure::persistence::repositories::data_source_instance_repository::DataSourceInstanceRepository,
};

pub struct ExternalDataSourceQueryServiceImpl {
    repository: Arc<dyn DataSourceInstanceRepository>,
}

impl ExternalDataSourceQueryServiceImpl {
    pub fn new(repository: Arc<dyn DataSourceInstanceRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ExternalDataSourceQueryService for ExternalDataSourceQueryServiceImpl {
    async fn handle_get_schema(
        &self,
        id: &DataSourceId,
    ) -> Result<DatasetSchema, ExternalDataSourceDomainError> {
        let data_source = self.repository.find_by_id(id).await?;
        let guard = data_source.lock().await;
        guard.get_schema().await
    }

    async fn handle_get_data(
        &self,
        id: &DataSourceId,
    ) -> Result<Vec<DatasetRow>, ExternalDataSourceDomainError> {
        let data_source = self.repository.find_by_id(id).await?;
        let guard = data_source.lock().await;
        guard.get_data().await
    }

    fn handle_extension_info(&self) -> (ExtensionInfo, PluginRegistrationMeta) {
        (
            OtlrwDataSourceImpl::extension_info(),
            OtlrwDataSourceImpl::registration_meta(),
        )
    }
}
