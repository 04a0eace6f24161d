pub mod external_data_source_domain_error;
pub mod job_kind;
