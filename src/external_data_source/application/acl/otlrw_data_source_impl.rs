use std::sync::Arc;

use async_trait::async_trait;

use crate::external_data_source::{
    application::serializers::dataset_otl_serializer,
    domain::model::{
        commands::{
            create_external_data_source_command::CreateExternalDataSourceCommand,
            edit_params_command::EditParamsCommand,
        },
        entities::dataset::{Dataset, DatasetRow, DatasetSchema},
        enums::{external_data_source_domain_error::ExternalDataSourceDomainError, job_kind::JobKind},
        value_objects::{
            data_source_id::DataSourceId,
            job_params::JobParams,
            plugin_registration_meta::{ExtensionInfo, PluginRegistrationMeta},
        },
    },
    interfaces::acl::{
        external_data_source::ExternalDataSource,
        interaction_system_facade::InteractionSystemFacade,
        otp_connector_facade::{
            CreateJobOptions, JobManager, OtlJob, OtpConnectorConfig, OtpConnectorFactory,
            OtpConnectorSettings,
        },
    },
};

/// External data source backed by OTL jobs: one job reads data for display,
/// a second one writes a dataset back through a generated query.
pub struct OtlrwDataSourceImpl {
    id: DataSourceId,
    job_manager: Arc<dyn JobManager>,
    job: Option<Arc<dyn OtlJob>>,
    job_write: Option<Arc<dyn OtlJob>>,
    job_params: JobParams,
    job_write_params: JobParams,
}

impl OtlrwDataSourceImpl {
    pub fn new(
        command: CreateExternalDataSourceCommand,
        interaction_system: &dyn InteractionSystemFacade,
        connector_factory: &dyn OtpConnectorFactory,
        connector_settings: &OtpConnectorSettings,
    ) -> Self {
        let job_manager = connector_factory.connect(OtpConnectorConfig {
            url: interaction_system.base_url(),
            settings: connector_settings.clone(),
        });

        Self::with_job_manager(DataSourceId::generate(), command, job_manager)
    }

    pub fn with_job_manager(
        id: DataSourceId,
        command: CreateExternalDataSourceCommand,
        job_manager: Arc<dyn JobManager>,
    ) -> Self {
        let job_params = JobParams::new(command.query_string(), command.extra_params().clone());
        let job_write_params = JobParams::new(
            command.query_write_string(),
            command.extra_params().clone(),
        );

        tracing::debug!(
            data_source_id = %id.as_string(),
            job_params = %job_params,
            job_write_params = %job_write_params,
            "Initing ExternalDatasource-OTLRW instance",
        );

        Self {
            id,
            job_manager,
            job: None,
            job_write: None,
            job_params,
            job_write_params,
        }
    }

    pub fn extension_info() -> ExtensionInfo {
        ExtensionInfo::otlrw()
    }

    pub fn registration_meta() -> PluginRegistrationMeta {
        PluginRegistrationMeta::otlrw()
    }

    pub fn id(&self) -> DataSourceId {
        self.id
    }

    pub fn job_params(&self) -> &JobParams {
        &self.job_params
    }

    pub fn job_write_params(&self) -> &JobParams {
        &self.job_write_params
    }

    pub fn has_read_job(&self) -> bool {
        self.job.is_some()
    }

    pub fn has_write_job(&self) -> bool {
        self.job_write.is_some()
    }

    pub fn dataset_to_otl(dataset: &Dataset) -> String {
        dataset_otl_serializer::dataset_to_otl(dataset)
    }

    async fn create_job(&self, kind: JobKind) -> Option<Arc<dyn OtlJob>> {
        let params = match kind {
            JobKind::Read => &self.job_params,
            JobKind::Write => &self.job_write_params,
        };

        tracing::debug!(
            data_source_id = %self.id.as_string(),
            job_kind = kind.as_str(),
            params = %params,
            "Creating OTL job instance",
        );

        match self
            .job_manager
            .create_job(params, CreateJobOptions { blocking: true })
            .await
        {
            Ok(job) => Some(job),
            Err(error) => {
                tracing::error!(
                    data_source_id = %self.id.as_string(),
                    job_kind = kind.as_str(),
                    error = %error,
                    "Error occurred while creating OTL job",
                );
                None
            }
        }
    }

    fn read_job(&self) -> Result<&Arc<dyn OtlJob>, ExternalDataSourceDomainError> {
        self.job
            .as_ref()
            .ok_or(ExternalDataSourceDomainError::JobNotCreated)
    }
}

#[async_trait]
impl ExternalDataSource for OtlrwDataSourceImpl {
    async fn init(&mut self) -> bool {
        match self.create_job(JobKind::Read).await {
            Some(job) => {
                self.job = Some(job);
                true
            }
            None => false,
        }
    }

    async fn init_write(&mut self) -> bool {
        match self.create_job(JobKind::Write).await {
            Some(job) => {
                self.job_write = Some(job);
                true
            }
            None => false,
        }
    }

    async fn get_schema(&self) -> Result<DatasetSchema, ExternalDataSourceDomainError> {
        self.read_job()?
            .dataset()
            .parse_schema()
            .await
            .map_err(|e| ExternalDataSourceDomainError::ConnectorFailure(e.to_string()))
    }

    async fn get_data(&self) -> Result<Vec<DatasetRow>, ExternalDataSourceDomainError> {
        self.read_job()?
            .dataset()
            .data()
            .await
            .map_err(|e| ExternalDataSourceDomainError::ConnectorFailure(e.to_string()))
    }

    async fn rerun(&self) -> Result<(), ExternalDataSourceDomainError> {
        let Some(job) = self.job.as_ref() else {
            return Ok(());
        };

        job.run()
            .await
            .map_err(|e| ExternalDataSourceDomainError::ConnectorFailure(e.to_string()))
    }

    fn edit_params(&mut self, command: EditParamsCommand) {
        let extra = command.extra_params().clone();

        tracing::debug!(
            data_source_id = %self.id.as_string(),
            query_string = command.query_string().map(|q| q.value()),
            extra_params = %serde_json::Value::Object(extra.clone()),
            existing = %self.job_params,
            "Editing parameters of OTL job",
        );
        self.job_params.merge(command.query_string(), extra.clone());

        let write_query = command.query_write_string().map(|query| match command.dataset() {
            Some(dataset) => query.prefixed_with(&Self::dataset_to_otl(dataset)),
            None => query.clone(),
        });

        tracing::debug!(
            data_source_id = %self.id.as_string(),
            query_write_string = write_query.as_ref().map(|q| q.value()),
            extra_params = %serde_json::Value::Object(extra.clone()),
            existing = %self.job_write_params,
            "Editing parameters of OTL write job",
        );
        self.job_write_params.merge(write_query.as_ref(), extra);
    }
}
