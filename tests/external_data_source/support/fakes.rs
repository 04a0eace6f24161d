use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use otlrw_data_source::external_data_source::{
    domain::model::{
        entities::dataset::{DatasetRow, DatasetSchema},
        value_objects::job_params::JobParams,
    },
    interfaces::acl::{
        interaction_system_facade::InteractionSystemFacade,
        otp_connector_facade::{
            ConnectorError, CreateJobOptions, JobDataset, JobManager, OtlJob, OtpConnectorConfig,
            OtpConnectorFactory,
        },
    },
};

pub struct FakeJobDataset {
    schema: DatasetSchema,
    rows: Vec<DatasetRow>,
    fail_reads: bool,
}

#[async_trait]
impl JobDataset for FakeJobDataset {
    async fn parse_schema(&self) -> Result<DatasetSchema, ConnectorError> {
        if self.fail_reads {
            return Err(ConnectorError::Unavailable("dataset unavailable".to_string()));
        }
        Ok(self.schema.clone())
    }

    async fn data(&self) -> Result<Vec<DatasetRow>, ConnectorError> {
        if self.fail_reads {
            return Err(ConnectorError::Unavailable("dataset unavailable".to_string()));
        }
        Ok(self.rows.clone())
    }
}

pub struct FakeOtlJob {
    dataset: Arc<FakeJobDataset>,
    run_calls: Mutex<usize>,
}

impl FakeOtlJob {
    pub fn run_calls(&self) -> usize {
        *self.run_calls.lock().expect("mutex poisoned")
    }
}

#[async_trait]
impl OtlJob for FakeOtlJob {
    fn dataset(&self) -> Arc<dyn JobDataset> {
        self.dataset.clone()
    }

    async fn run(&self) -> Result<(), ConnectorError> {
        *self.run_calls.lock().expect("mutex poisoned") += 1;
        Ok(())
    }
}

#[derive(Default)]
struct FakeJobManagerState {
    created_params: Vec<JobParams>,
    created_options: Vec<CreateJobOptions>,
    jobs: Vec<Arc<FakeOtlJob>>,
    fail_create: bool,
    fail_reads: bool,
    schema: DatasetSchema,
    rows: Vec<DatasetRow>,
}

pub struct FakeJobManager {
    state: Mutex<FakeJobManagerState>,
}

impl FakeJobManager {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeJobManagerState::default()),
        }
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.state.lock().expect("mutex poisoned").fail_create = fail;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().expect("mutex poisoned").fail_reads = fail;
    }

    pub fn set_result(&self, schema: DatasetSchema, rows: Vec<DatasetRow>) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.schema = schema;
        state.rows = rows;
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").created_params.len()
    }

    pub fn created_params(&self) -> Vec<JobParams> {
        self.state.lock().expect("mutex poisoned").created_params.clone()
    }

    pub fn created_options(&self) -> Vec<CreateJobOptions> {
        self.state.lock().expect("mutex poisoned").created_options.clone()
    }

    pub fn run_calls(&self) -> usize {
        self.state
            .lock()
            .expect("mutex poisoned")
            .jobs
            .iter()
            .map(|job| job.run_calls())
            .sum()
    }
}

#[async_trait]
impl JobManager for FakeJobManager {
    async fn create_job(
        &self,
        params: &JobParams,
        options: CreateJobOptions,
    ) -> Result<Arc<dyn OtlJob>, ConnectorError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.created_params.push(params.clone());
        state.created_options.push(options);

        if state.fail_create {
            return Err(ConnectorError::JobFailed("syntax error in OTL".to_string()));
        }

        let job = Arc::new(FakeOtlJob {
            dataset: Arc::new(FakeJobDataset {
                schema: state.schema.clone(),
                rows: state.rows.clone(),
                fail_reads: state.fail_reads,
            }),
            run_calls: Mutex::new(0),
        });
        state.jobs.push(job.clone());

        Ok(job)
    }
}

pub struct FakeInteractionSystem {
    base_url: String,
}

impl FakeInteractionSystem {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl InteractionSystemFacade for FakeInteractionSystem {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

pub struct FakeConnectorFactory {
    job_manager: Arc<FakeJobManager>,
    configs: Mutex<Vec<OtpConnectorConfig>>,
}

impl FakeConnectorFactory {
    pub fn new(job_manager: Arc<FakeJobManager>) -> Self {
        Self {
            job_manager,
            configs: Mutex::new(Vec::new()),
        }
    }

    pub fn configs(&self) -> Vec<OtpConnectorConfig> {
        self.configs.lock().expect("mutex poisoned").clone()
    }
}

impl OtpConnectorFactory for FakeConnectorFactory {
    fn connect(&self, config: OtpConnectorConfig) -> Arc<dyn JobManager> {
        self.configs.lock().expect("mutex poisoned").push(config);
        self.job_manager.clone()
    }
}
