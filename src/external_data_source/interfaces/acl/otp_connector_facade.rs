use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::external_data_source::domain::model::{
    entities::dataset::{DatasetRow, DatasetSchema},
    value_objects::job_params::JobParams,
};

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("job failed: {0}")]
    JobFailed(String),

    #[error("connector unavailable: {0}")]
    Unavailable(String),

    #[error("job timed out: {0}")]
    Timeout(String),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CreateJobOptions {
    /// Wait until the remote job has finished before returning the handle.
    pub blocking: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OtpConnectorSettings {
    pub mode_http: String,
    pub username: String,
    pub password: String,
    pub max_job_exec_time: Duration,
    pub check_job_delay_time: Duration,
    pub http_request_timeout: Duration,
    pub login_before_job_run: bool,
}

impl Default for OtpConnectorSettings {
    fn default() -> Self {
        Self {
            mode_http: "http".to_string(),
            username: "admin".to_string(),
            password: "12345678".to_string(),
            max_job_exec_time: Duration::from_secs(300),
            check_job_delay_time: Duration::from_secs(1),
            http_request_timeout: Duration::from_secs(70),
            login_before_job_run: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OtpConnectorConfig {
    pub url: String,
    pub settings: OtpConnectorSettings,
}

#[async_trait]
pub trait JobDataset: Send + Sync {
    async fn parse_schema(&self) -> Result<DatasetSchema, ConnectorError>;
    async fn data(&self) -> Result<Vec<DatasetRow>, ConnectorError>;
}

#[async_trait]
pub trait OtlJob: Send + Sync {
    fn dataset(&self) -> Arc<dyn JobDataset>;
    async fn run(&self) -> Result<(), ConnectorError>;
}

#[async_trait]
pub trait JobManager: Send + Sync {
    async fn create_job(
        &self,
        params: &JobParams,
        options: CreateJobOptions,
    ) -> Result<Arc<dyn OtlJob>, ConnectorError>;
}

/// Builds the job manager of an OTP connector bound to one service URL.
pub trait OtpConnectorFactory: Send + Sync {
    fn connect(&self, config: OtpConnectorConfig) -> Arc<dyn JobManager>;
}
