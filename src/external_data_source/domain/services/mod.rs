pub mod external_data_source_command_service;
pub mod external_data_source_query_service;
