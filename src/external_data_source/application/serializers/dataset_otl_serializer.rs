use serde_json::Value;

use crate::external_data_source::domain::model::entities::dataset::{Dataset, DatasetRow};

pub const FIELD_SEPARATOR: &str = "###";
pub const ROW_SEPARATOR: &str = "&&&";

const ROWS_FIELD: &str = "otlrw_rows";
const FIELDS_FIELD: &str = "otlrw_fields";

/// Renders `dataset` as an OTL fragment that rebuilds it as a result set.
///
/// Rows are flattened into one string literal, split back into rows with
/// `mvexpand` and into columns with `mvindex`. Values containing a separator
/// sequence are not escaped and will shift the columns of their row.
/// Column names are written into `eval` unquoted, so names containing spaces
/// or OTL syntax produce an invalid query.
pub fn dataset_to_otl(dataset: &Dataset) -> String {
    let columns: Vec<&str> = dataset.schema().column_names().collect();
    let encoded = encode_rows(dataset.rows(), &columns);

    let mut otl = format!(
        "| makeresults count=1 \
         | eval {ROWS_FIELD}=\"{encoded}\" \
         | eval {ROWS_FIELD}=split({ROWS_FIELD}, \"{ROW_SEPARATOR}\") \
         | mvexpand {ROWS_FIELD} \
         | eval {FIELDS_FIELD}=split({ROWS_FIELD}, \"{FIELD_SEPARATOR}\") "
    );

    if !columns.is_empty() {
        let assignments = columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column}=mvindex({FIELDS_FIELD}, {index})"))
            .collect::<Vec<_>>()
            .join(", ");
        otl.push_str(&format!("| eval {assignments} "));
    }

    otl.push_str(&format!("| fields - {ROWS_FIELD}, {FIELDS_FIELD} "));
    otl
}

fn encode_rows(rows: &[DatasetRow], columns: &[&str]) -> String {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| escape_literal(&render_value(row.get(*column))))
                .collect::<Vec<_>>()
                .join(FIELD_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    }
}

fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
