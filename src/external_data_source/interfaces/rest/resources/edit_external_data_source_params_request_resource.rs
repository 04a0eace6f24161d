use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditExternalDataSourceParamsRequestResource {
    pub query_string: Option<String>,
    pub query_write_string: Option<String>,
    #[validate(nested)]
    pub dataset: Option<DatasetResource>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra_params: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct DatasetResource {
    #[validate(custom(function = "validate_rows_are_objects"))]
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<Value>,
    #[schema(value_type = Object)]
    pub schema: IndexMap<String, String>,
}

fn validate_rows_are_objects(rows: &[Value]) -> Result<(), validator::ValidationError> {
    if rows.iter().all(Value::is_object) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("dataset_rows_must_be_objects"))
    }
}
