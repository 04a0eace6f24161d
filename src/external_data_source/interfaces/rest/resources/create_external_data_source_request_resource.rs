use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExternalDataSourceRequestResource {
    pub query_string: Option<String>,
    pub query_write_string: Option<String>,
    /// Any other job parameter, forwarded to the connector untouched.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra_params: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ExternalDataSourceCreatedResource {
    pub id: String,
}
