pub mod data_source_instance_repository;
pub mod in_memory;
