use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::external_data_source::{
    domain::model::{
        enums::external_data_source_domain_error::ExternalDataSourceDomainError,
        value_objects::data_source_id::DataSourceId,
    },
    interfaces::acl::external_data_source::ExternalDataSource,
};

/// A hosted data source. Calls on one instance are serialized by the mutex.
pub type SharedExternalDataSource = Arc<Mutex<Box<dyn ExternalDataSource>>>;

#[async_trait]
pub trait DataSourceInstanceRepository: Send + Sync {
    async fn save(&self, id: DataSourceId, data_source: Box<dyn ExternalDataSource>);

    async fn find_by_id(
        &self,
        id: &DataSourceId,
    ) -> Result<SharedExternalDataSource, ExternalDataSourceDomainError>;

    async fn delete(&self, id: &DataSourceId) -> Result<(), ExternalDataSourceDomainError>;
}
