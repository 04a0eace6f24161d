use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExternalDataSourceDomainError {
    #[error("data source id is invalid")]
    InvalidDataSourceId,

    #[error("data source not found")]
    DataSourceNotFound,

    #[error("OTL job has not been created, call init first")]
    JobNotCreated,

    #[error("connector failure: {0}")]
    ConnectorFailure(String),
}
