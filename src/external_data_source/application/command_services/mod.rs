pub mod external_data_source_command_service_impl;
