pub mod dataset_otl_serializer;
