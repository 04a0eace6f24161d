use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::external_data_source::domain::model::value_objects::otl_query::OtlQuery;

/// Key under which the connector expects the query text.
pub const ORIGINAL_OTL_KEY: &str = "original_otl";

/// Parameters handed to the job manager when a job is created.
///
/// Always holds the query under [`ORIGINAL_OTL_KEY`]. Every other key is
/// opaque to the adapter and forwarded as is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobParams(Map<String, Value>);

impl JobParams {
    pub fn new(query: &OtlQuery, extra: Map<String, Value>) -> Self {
        let mut params = Self(Map::new());
        params.merge(Some(query), extra);
        params
    }

    pub fn original_otl(&self) -> &str {
        self.0
            .get(ORIGINAL_OTL_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Last-write-wins merge of `extra` and, when given, the query text.
    /// Keys missing from the update are left as they are.
    pub fn merge(&mut self, query: Option<&OtlQuery>, extra: Map<String, Value>) {
        for (key, value) in extra {
            if key == ORIGINAL_OTL_KEY {
                continue;
            }
            self.0.insert(key, value);
        }

        if let Some(query) = query {
            self.0.insert(
                ORIGINAL_OTL_KEY.to_string(),
                Value::String(query.value().to_string()),
            );
        }
    }
}

impl fmt::Display for JobParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
