pub mod external_data_source_query_service_impl;
