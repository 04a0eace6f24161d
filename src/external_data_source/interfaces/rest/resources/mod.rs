pub mod create_external_data_source_request_resource;
pub mod edit_external_data_source_params_request_resource;
pub mod external_data_source_error_response_resource;
pub mod init_result_resource;
pub mod plugin_meta_resource;
