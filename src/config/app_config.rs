use std::time::Duration;

use crate::external_data_source::interfaces::acl::otp_connector_facade::OtpConnectorSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub otp_mode_http: String,
    pub otp_username: String,
    pub otp_password: String,
    pub otp_max_job_exec_time_secs: u64,
    pub otp_check_job_delay_time_secs: u64,
    pub otp_http_request_timeout_secs: u64,
    pub otp_login_before_job_run: bool,
    pub log_filter: String,
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            otp_mode_http: std::env::var("OTP_MODE_HTTP").unwrap_or_else(|_| "http".to_string()),
            otp_username: std::env::var("OTP_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            otp_password: std::env::var("OTP_PASSWORD")
                .unwrap_or_else(|_| "12345678".to_string()),
            otp_max_job_exec_time_secs: std::env::var("OTP_MAX_JOB_EXEC_TIME")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            otp_check_job_delay_time_secs: std::env::var("OTP_CHECK_JOB_DELAY_TIME")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1),
            otp_http_request_timeout_secs: std::env::var("OTP_HTTP_REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "70".to_string())
                .parse()
                .unwrap_or(70),
            otp_login_before_job_run: std::env::var("OTP_LOGIN_BEFORE_JOB_RUN")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn otp_connector_settings(&self) -> OtpConnectorSettings {
        OtpConnectorSettings {
            mode_http: self.otp_mode_http.clone(),
            username: self.otp_username.clone(),
            password: self.otp_password.clone(),
            max_job_exec_time: Duration::from_secs(self.otp_max_job_exec_time_secs),
            check_job_delay_time: Duration::from_secs(self.otp_check_job_delay_time_secs),
            http_request_timeout: Duration::from_secs(self.otp_http_request_timeout_secs),
            login_before_job_run: self.otp_login_before_job_run,
        }
    }
}
