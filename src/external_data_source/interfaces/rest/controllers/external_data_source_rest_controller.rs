use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use serde_json::Value;
use validator::Validate;

use crate::external_data_source::{
    domain::{
        model::{
            commands::{
                create_external_data_source_command::CreateExternalDataSourceCommand,
                edit_params_command::{EditParamsCommand, EditParamsCommandParts},
            },
            entities::dataset::{Dataset, DatasetRow, DatasetSchema},
            enums::external_data_source_domain_error::ExternalDataSourceDomainError,
            value_objects::data_source_id::DataSourceId,
        },
        services::{
            external_data_source_command_service::ExternalDataSourceCommandService,
            external_data_source_query_service::ExternalDataSourceQueryService,
        },
    },
    interfaces::rest::resources::{
        create_external_data_source_request_resource::{
            CreateExternalDataSourceRequestResource, ExternalDataSourceCreatedResource,
        },
        edit_external_data_source_params_request_resource::{
            DatasetResource, EditExternalDataSourceParamsRequestResource,
        },
        external_data_source_error_response_resource::ExternalDataSourceErrorResponseResource,
        init_result_resource::InitResultResource,
        plugin_meta_resource::PluginMetaResource,
    },
};

type ErrorResponse = (StatusCode, Json<ExternalDataSourceErrorResponseResource>);

#[derive(Clone)]
pub struct ExternalDataSourceRestControllerState {
    pub command_service: Arc<dyn ExternalDataSourceCommandService>,
    pub query_service: Arc<dyn ExternalDataSourceQueryService>,
}

pub fn router(state: ExternalDataSourceRestControllerState) -> Router {
    Router::new()
        .route("/external-data-sources/_meta", get(get_plugin_meta))
        .route("/external-data-sources", post(create_external_data_source))
        .route(
            "/external-data-sources/:data_source_id",
            delete(delete_external_data_source),
        )
        .route("/external-data-sources/:data_source_id/init", post(init))
        .route(
            "/external-data-sources/:data_source_id/init-write",
            post(init_write),
        )
        .route("/external-data-sources/:data_source_id/schema", get(get_schema))
        .route("/external-data-sources/:data_source_id/data", get(get_data))
        .route("/external-data-sources/:data_source_id/rerun", post(rerun))
        .route(
            "/external-data-sources/:data_source_id/params",
            patch(edit_params),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/external-data-sources/_meta",
    tag = "external-data-sources",
    responses(
        (status = 200, description = "Extension and registration metadata", body = PluginMetaResource)
    )
)]
pub async fn get_plugin_meta(
    State(state): State<ExternalDataSourceRestControllerState>,
) -> Json<PluginMetaResource> {
    let (extension_info, registration_meta) = state.query_service.handle_extension_info();

    Json(PluginMetaResource {
        extension_type: extension_info.extension_type.to_string(),
        name: registration_meta.name.to_string(),
        plugin_type: registration_meta.plugin_type.to_string(),
        title: registration_meta.title.to_string(),
        version: registration_meta.version.to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/external-data-sources",
    tag = "external-data-sources",
    request_body = CreateExternalDataSourceRequestResource,
    responses(
        (status = 201, description = "Data source created", body = ExternalDataSourceCreatedResource),
        (status = 400, description = "Invalid request", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn create_external_data_source(
    State(state): State<ExternalDataSourceRestControllerState>,
    Json(request): Json<CreateExternalDataSourceRequestResource>,
) -> Result<(StatusCode, Json<ExternalDataSourceCreatedResource>), ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = CreateExternalDataSourceCommand::new(
        request.query_string,
        request.query_write_string,
        request.extra_params,
    );

    let id = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ExternalDataSourceCreatedResource {
            id: id.as_string(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/external-data-sources/{data_source_id}",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    responses(
        (status = 204, description = "Data source removed"),
        (status = 400, description = "Invalid identifier", body = ExternalDataSourceErrorResponseResource),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn delete_external_data_source(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/external-data-sources/{data_source_id}/init",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    responses(
        (status = 200, description = "Whether the read job was created", body = InitResultResource),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn init(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
) -> Result<Json<InitResultResource>, ErrorResponse> {
    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    let success = state
        .command_service
        .handle_init(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(InitResultResource { success }))
}

#[utoipa::path(
    post,
    path = "/external-data-sources/{data_source_id}/init-write",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    responses(
        (status = 200, description = "Whether the write job was created", body = InitResultResource),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn init_write(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
) -> Result<Json<InitResultResource>, ErrorResponse> {
    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    let success = state
        .command_service
        .handle_init_write(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(InitResultResource { success }))
}

#[utoipa::path(
    get,
    path = "/external-data-sources/{data_source_id}/schema",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    responses(
        (status = 200, description = "Column name to type", body = Object),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource),
        (status = 409, description = "Read job not created", body = ExternalDataSourceErrorResponseResource),
        (status = 502, description = "Connector failure", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn get_schema(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
) -> Result<Json<DatasetSchema>, ErrorResponse> {
    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    let schema = state
        .query_service
        .handle_get_schema(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(schema))
}

#[utoipa::path(
    get,
    path = "/external-data-sources/{data_source_id}/data",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    responses(
        (status = 200, description = "Rows of the read job", body = [Object]),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource),
        (status = 409, description = "Read job not created", body = ExternalDataSourceErrorResponseResource),
        (status = 502, description = "Connector failure", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn get_data(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
) -> Result<Json<Vec<DatasetRow>>, ErrorResponse> {
    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    let rows = state
        .query_service
        .handle_get_data(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/external-data-sources/{data_source_id}/rerun",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    responses(
        (status = 204, description = "Read job re-executed, or nothing to rerun"),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource),
        (status = 502, description = "Connector failure", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn rerun(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_rerun(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/external-data-sources/{data_source_id}/params",
    tag = "external-data-sources",
    params(("data_source_id" = String, Path, description = "Data source identifier")),
    request_body = EditExternalDataSourceParamsRequestResource,
    responses(
        (status = 204, description = "Parameters merged"),
        (status = 400, description = "Invalid request", body = ExternalDataSourceErrorResponseResource),
        (status = 404, description = "Data source not found", body = ExternalDataSourceErrorResponseResource)
    )
)]
pub async fn edit_params(
    State(state): State<ExternalDataSourceRestControllerState>,
    Path(data_source_id): Path<String>,
    Json(request): Json<EditExternalDataSourceParamsRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let id = DataSourceId::new(&data_source_id).map_err(map_domain_error)?;

    let command = EditParamsCommand::new(EditParamsCommandParts {
        query_string: request.query_string,
        query_write_string: request.query_write_string,
        dataset: request.dataset.map(into_dataset),
        extra_params: request.extra_params,
    });

    state
        .command_service
        .handle_edit_params(&id, command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn into_dataset(resource: DatasetResource) -> Dataset {
    let rows = resource
        .rows
        .into_iter()
        .filter_map(|row| match row {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    Dataset::new(rows, DatasetSchema::new(resource.schema))
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ExternalDataSourceErrorResponseResource { message }),
    )
}

fn map_domain_error(error: ExternalDataSourceDomainError) -> ErrorResponse {
    let status = match error {
        ExternalDataSourceDomainError::InvalidDataSourceId => StatusCode::BAD_REQUEST,
        ExternalDataSourceDomainError::DataSourceNotFound => StatusCode::NOT_FOUND,
        ExternalDataSourceDomainError::JobNotCreated => StatusCode::CONFLICT,
        ExternalDataSourceDomainError::ConnectorFailure(_) => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ExternalDataSourceErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
