pub mod external_data_source_rest_controller;
