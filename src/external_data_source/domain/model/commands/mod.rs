pub mod create_external_data_source_command;
pub mod edit_params_command;
