use tracing_subscriber::{EnvFilter, fmt};

use crate::config::app_config::AppConfig;

/// Installs a global fmt subscriber filtered by `config.log_filter`.
///
/// Returns `false` when a subscriber was already installed, e.g. by the host.
pub fn init_tracing(config: &AppConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
