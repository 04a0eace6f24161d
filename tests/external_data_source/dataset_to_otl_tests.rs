use otlrw_data_source::external_data_source::{
    application::{
        acl::otlrw_data_source_impl::OtlrwDataSourceImpl,
        serializers::dataset_otl_serializer::dataset_to_otl,
    },
    domain::model::entities::dataset::{Dataset, DatasetSchema},
};
use serde_json::json;

use crate::support::fixtures::{dataset, row};

fn template_for(encoded: &str) -> String {
    format!(
        "| makeresults count=1 | eval otlrw_rows=\"{encoded}\" \
         | eval otlrw_rows=split(otlrw_rows, \"&&&\") | mvexpand otlrw_rows \
         | eval otlrw_fields=split(otlrw_rows, \"###\") \
         | eval a=mvindex(otlrw_fields, 0), b=mvindex(otlrw_fields, 1) \
         | fields - otlrw_rows, otlrw_fields "
    )
}

#[test]
fn empty_rows_embed_an_empty_literal() {
    let otl = dataset_to_otl(&dataset(json!([])));

    assert_eq!(otl, template_for(""));
    assert!(otl.contains("eval otlrw_rows=\"\""));
}

#[test]
fn single_row_has_no_row_separator() {
    let otl = dataset_to_otl(&dataset(json!([{ "a": 1, "b": "x" }])));

    assert_eq!(otl, template_for("1###x"));
    assert!(otl.contains("\"1###x\""));
}

#[test]
fn rows_are_joined_with_row_separator() {
    let otl = dataset_to_otl(&dataset(json!([{ "a": 1, "b": 2 }, { "a": 3, "b": 4 }])));

    assert!(otl.contains("\"1###2&&&3###4\""));
}

#[test]
fn values_follow_schema_order_not_row_order() {
    let mut reversed = serde_json::Map::new();
    reversed.insert("b".to_string(), json!("second"));
    reversed.insert("a".to_string(), json!("first"));
    let data = Dataset::new(
        vec![reversed],
        DatasetSchema::from_columns([("a", "string"), ("b", "string")]),
    );

    let otl = dataset_to_otl(&data);

    assert!(otl.contains("\"first###second\""));
    assert!(otl.contains("| eval a=mvindex(otlrw_fields, 0), b=mvindex(otlrw_fields, 1) "));
}

#[test]
fn missing_and_null_values_render_empty() {
    let otl = dataset_to_otl(&dataset(json!([{ "a": null }, { "b": true }])));

    assert!(otl.contains("\"###&&&###true\""));
}

#[test]
fn quotes_are_escaped_inside_the_literal() {
    let otl = dataset_to_otl(&Dataset::new(
        vec![row(json!({ "a": "say \"hi\"", "b": "c:\\tmp" }))],
        DatasetSchema::from_columns([("a", "string"), ("b", "string")]),
    ));

    assert!(otl.contains("\"say \\\"hi\\\"###c:\\\\tmp\""));
}

#[test]
fn separator_inside_value_is_not_escaped() {
    let otl = dataset_to_otl(&dataset(json!([{ "a": "x###y", "b": "z" }])));

    assert!(otl.contains("\"x###y###z\""));
}

#[test]
fn column_names_are_written_into_eval_verbatim() {
    let otl = dataset_to_otl(&Dataset::new(
        vec![row(json!({ "a b": 1 }))],
        DatasetSchema::from_columns([("a b", "int")]),
    ));

    assert!(otl.contains("\"1\""));
    assert!(otl.contains("| eval a b=mvindex(otlrw_fields, 0) "));
}

#[test]
fn empty_schema_skips_column_assignment() {
    let otl = dataset_to_otl(&Dataset::new(vec![row(json!({ "a": 1 }))], DatasetSchema::default()));

    assert!(!otl.contains("mvindex"));
    assert!(otl.ends_with("| fields - otlrw_rows, otlrw_fields "));
}

#[test]
fn adapter_exposes_the_same_serialization() {
    let data = dataset(json!([{ "a": 5, "b": "q" }]));

    assert_eq!(OtlrwDataSourceImpl::dataset_to_otl(&data), dataset_to_otl(&data));
}
