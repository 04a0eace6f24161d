use uuid::Uuid;

use crate::external_data_source::domain::model::enums::external_data_source_domain_error::ExternalDataSourceDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DataSourceId(Uuid);

impl DataSourceId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn new(value: &str) -> Result<Self, ExternalDataSourceDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| ExternalDataSourceDomainError::InvalidDataSourceId)?;
        Ok(Self(parsed))
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}
