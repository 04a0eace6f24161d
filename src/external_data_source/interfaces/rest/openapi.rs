use utoipa::OpenApi;

use crate::external_data_source::interfaces::rest::resources::{
    create_external_data_source_request_resource::{
        CreateExternalDataSourceRequestResource, ExternalDataSourceCreatedResource,
    },
    edit_external_data_source_params_request_resource::{
        DatasetResource, EditExternalDataSourceParamsRequestResource,
    },
    external_data_source_error_response_resource::ExternalDataSourceErrorResponseResource,
    init_result_resource::InitResultResource,
    plugin_meta_resource::PluginMetaResource,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::get_plugin_meta,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::create_external_data_source,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::delete_external_data_source,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::init,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::init_write,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::get_schema,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::get_data,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::rerun,
        crate::external_data_source::interfaces::rest::controllers::external_data_source_rest_controller::edit_params
    ),
    components(
        schemas(
            CreateExternalDataSourceRequestResource,
            ExternalDataSourceCreatedResource,
            EditExternalDataSourceParamsRequestResource,
            DatasetResource,
            ExternalDataSourceErrorResponseResource,
            InitResultResource,
            PluginMetaResource
        )
    ),
    tags(
        (name = "external-data-sources", description = "OTL read/write external data sources")
    )
)]
pub struct ExternalDataSourceApiDoc;
