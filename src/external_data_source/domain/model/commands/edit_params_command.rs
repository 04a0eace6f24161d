use serde_json::{Map, Value};

use crate::external_data_source::domain::model::{
    entities::dataset::Dataset, value_objects::otl_query::OtlQuery,
};

/// A partial update of the read and write job parameters.
#[derive(Clone, Debug, Default)]
pub struct EditParamsCommand {
    query_string: Option<OtlQuery>,
    query_write_string: Option<OtlQuery>,
    dataset: Option<Dataset>,
    extra_params: Map<String, Value>,
}

#[derive(Default)]
pub struct EditParamsCommandParts {
    pub query_string: Option<String>,
    pub query_write_string: Option<String>,
    pub dataset: Option<Dataset>,
    pub extra_params: Map<String, Value>,
}

impl EditParamsCommand {
    pub fn new(parts: EditParamsCommandParts) -> Self {
        Self {
            query_string: parts.query_string.map(OtlQuery::new),
            query_write_string: parts.query_write_string.map(OtlQuery::new),
            dataset: parts.dataset,
            extra_params: parts.extra_params,
        }
    }

    /// The read query, only when it is non-empty after normalization.
    pub fn query_string(&self) -> Option<&OtlQuery> {
        self.query_string.as_ref().filter(|query| !query.is_empty())
    }

    pub fn query_write_string(&self) -> Option<&OtlQuery> {
        self.query_write_string.as_ref()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn extra_params(&self) -> &Map<String, Value> {
        &self.extra_params
    }
}
