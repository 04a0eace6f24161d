pub mod otlrw_data_source_impl;
