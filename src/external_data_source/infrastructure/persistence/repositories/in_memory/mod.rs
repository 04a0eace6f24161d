pub mod in_memory_data_source_instance_repository_impl;
