pub mod data_source_id;
pub mod job_params;
pub mod otl_query;
pub mod plugin_registration_meta;
