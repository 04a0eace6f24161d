pub mod config;
pub mod external_data_source;
