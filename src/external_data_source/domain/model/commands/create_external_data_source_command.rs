use serde_json::{Map, Value};

use crate::external_data_source::domain::model::value_objects::otl_query::OtlQuery;

#[derive(Clone, Debug, Default)]
pub struct CreateExternalDataSourceCommand {
    query_string: OtlQuery,
    query_write_string: OtlQuery,
    extra_params: Map<String, Value>,
}

impl CreateExternalDataSourceCommand {
    pub fn new(
        query_string: Option<String>,
        query_write_string: Option<String>,
        extra_params: Map<String, Value>,
    ) -> Self {
        Self {
            query_string: OtlQuery::new(query_string.unwrap_or_default()),
            query_write_string: OtlQuery::new(query_write_string.unwrap_or_default()),
            extra_params,
        }
    }

    pub fn query_string(&self) -> &OtlQuery {
        &self.query_string
    }

    pub fn query_write_string(&self) -> &OtlQuery {
        &self.query_write_string
    }

    pub fn extra_params(&self) -> &Map<String, Value> {
        &self.extra_params
    }
}
