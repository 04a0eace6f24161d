use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type DatasetRow = Map<String, Value>;

/// Column name to engine type name, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetSchema(IndexMap<String, String>);

impl DatasetSchema {
    pub fn new(columns: IndexMap<String, String>) -> Self {
        Self(columns)
    }

    pub fn from_columns<I, K, V>(columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            columns
                .into_iter()
                .map(|(name, column_type)| (name.into(), column_type.into()))
                .collect(),
        )
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn column_type(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
    schema: DatasetSchema,
}

impl Dataset {
    pub fn new(rows: Vec<DatasetRow>, schema: DatasetSchema) -> Self {
        Self { rows, schema }
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }
}
