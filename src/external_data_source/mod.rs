use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::app_config::AppConfig,
    external_data_source::{
        application::{
            command_services::external_data_source_command_service_impl::ExternalDataSourceCommandServiceImpl,
            query_services::external_data_source_query_service_impl::ExternalDataSourceQueryServiceImpl,
        },
        infrastructure::persistence::repositories::in_memory::in_memory_data_source_instance_repository_impl::InMemoryDataSourceInstanceRepositoryImpl,
        interfaces::{
            acl::{
                interaction_system_facade::InteractionSystemFacade,
                otp_connector_facade::OtpConnectorFactory,
            },
            rest::{
                controllers::external_data_source_rest_controller::{
                    ExternalDataSourceRestControllerState, router,
                },
                openapi::ExternalDataSourceApiDoc,
            },
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Wires the hosting services over the given platform collaborators and
/// returns the REST router, Swagger UI included.
pub fn build_external_data_source_router(
    config: &AppConfig,
    interaction_system: Arc<dyn InteractionSystemFacade>,
    connector_factory: Arc<dyn OtpConnectorFactory>,
) -> Router {
    let repository = Arc::new(InMemoryDataSourceInstanceRepositoryImpl::new());

    let command_service = Arc::new(ExternalDataSourceCommandServiceImpl::new(
        repository.clone(),
        interaction_system,
        connector_factory,
        config.otp_connector_settings(),
    ));
    let query_service = Arc::new(ExternalDataSourceQueryServiceImpl::new(repository));

    router(ExternalDataSourceRestControllerState {
        command_service,
        query_service,
    })
    .merge(
        SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ExternalDataSourceApiDoc::openapi()),
    )
}
