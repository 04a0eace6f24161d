use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::external_data_source::{
    domain::model::{
        enums::external_data_source_domain_error::ExternalDataSourceDomainError,
        value_objects::data_source_id::DataSourceId,
    },
    infrastructure::persistence::repositories::data_source_instance_repository::{
        DataSourceInstanceRepository, SharedExternalDataSource,
    },
    interfaces::acl::external_data_source::ExternalDataSource,
};

pub struct InMemoryDataSourceInstanceRepositoryImpl {
    instances: Arc<RwLock<HashMap<DataSourceId, SharedExternalDataSource>>>,
}

impl InMemoryDataSourceInstanceRepositoryImpl {
    pub fn new() -> Self {
        Self {
            instances: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.instances.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.instances.read().await.is_empty()
    }
}

impl Default for InMemoryDataSourceInstanceRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSourceInstanceRepository for InMemoryDataSourceInstanceRepositoryImpl {
    async fn save(&self, id: DataSourceId, data_source: Box<dyn ExternalDataSource>) {
        let mut write_guard = self.instances.write().await;
        write_guard.insert(id, Arc::new(Mutex::new(data_source)));
    }

    async fn find_by_id(
        &self,
        id: &DataSourceId,
    ) -> Result<SharedExternalDataSource, ExternalDataSourceDomainError> {
        let read_guard = self.instances.read().await;
        read_guard
            .get(id)
            .cloned()
            .ok_or(ExternalDataSourceDomainError::DataSourceNotFound)
    }

    async fn delete(&self, id: &DataSourceId) -> Result<(), ExternalDataSourceDomainError> {
        let mut write_guard = self.instances.write().await;
        write_guard
            .remove(id)
            .map(|_| ())
            .ok_or(ExternalDataSourceDomainError::DataSourceNotFound)
    }
}
