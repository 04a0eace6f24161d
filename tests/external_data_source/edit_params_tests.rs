use otlrw_data_source::external_data_source::{
    application::serializers::dataset_otl_serializer::dataset_to_otl,
    domain::model::value_objects::otl_query::OtlQuery,
    interfaces::acl::external_data_source::ExternalDataSource,
};
use serde_json::json;

use crate::support::{
    create_data_source_harness,
    fixtures::{READ_OTL, WRITE_OTL, dataset, edit_command},
};

#[test]
fn construction_seeds_both_param_sets_with_extras() {
    let harness = create_data_source_harness();
    let data_source = &harness.data_source;

    assert_eq!(data_source.job_params().original_otl(), READ_OTL);
    assert_eq!(data_source.job_write_params().original_otl(), WRITE_OTL);
    assert_eq!(data_source.job_params().get("cache_ttl"), Some(&json!(60)));
    assert_eq!(data_source.job_write_params().get("cache_ttl"), Some(&json!(60)));
}

#[test]
fn query_strings_lose_carriage_returns_and_newlines() {
    let mut harness = create_data_source_harness();

    harness.data_source.edit_params(edit_command(
        Some("| readFile path=a\r\n| head 10\n"),
        Some("| writeFile\npath=b"),
        None,
        json!({}),
    ));

    assert_eq!(
        harness.data_source.job_params().original_otl(),
        "| readFile path=a| head 10"
    );
    assert_eq!(
        harness.data_source.job_write_params().original_otl(),
        "| writeFilepath=b"
    );
}

#[test]
fn last_non_empty_read_query_wins_and_earlier_keys_persist() {
    let mut harness = create_data_source_harness();

    harness.data_source.edit_params(edit_command(
        Some("| readFile path=first"),
        None,
        None,
        json!({ "tws": 100 }),
    ));
    harness.data_source.edit_params(edit_command(
        Some("| readFile path=second\n"),
        None,
        None,
        json!({ "twf": 200 }),
    ));
    harness
        .data_source
        .edit_params(edit_command(Some(""), None, None, json!({ "sid": "abc" })));
    harness
        .data_source
        .edit_params(edit_command(None, None, None, json!({})));

    let params = harness.data_source.job_params();
    assert_eq!(params.original_otl(), "| readFile path=second");
    assert_eq!(params.get("tws"), Some(&json!(100)));
    assert_eq!(params.get("twf"), Some(&json!(200)));
    assert_eq!(params.get("sid"), Some(&json!("abc")));
    assert_eq!(params.get("cache_ttl"), Some(&json!(60)));
}

#[test]
fn newline_only_read_query_counts_as_empty() {
    let mut harness = create_data_source_harness();

    harness
        .data_source
        .edit_params(edit_command(Some("\r\n"), None, None, json!({})));

    assert_eq!(harness.data_source.job_params().original_otl(), READ_OTL);
}

#[test]
fn empty_write_query_is_still_applied() {
    let mut harness = create_data_source_harness();

    harness
        .data_source
        .edit_params(edit_command(None, Some(""), None, json!({})));

    assert_eq!(harness.data_source.job_write_params().original_otl(), "");
    assert_eq!(harness.data_source.job_params().original_otl(), READ_OTL);
}

#[test]
fn dataset_is_prepended_to_write_query() {
    let mut harness = create_data_source_harness();
    let data = dataset(json!([{ "a": 1, "b": "x" }]));
    let expected = format!("{}{}", dataset_to_otl(&data), "| writeFile path=out");

    harness.data_source.edit_params(edit_command(
        None,
        Some("| writeFile path=out\n"),
        Some(data),
        json!({}),
    ));

    assert_eq!(harness.data_source.job_write_params().original_otl(), expected);
    assert_eq!(harness.data_source.job_params().original_otl(), READ_OTL);
}

#[test]
fn dataset_without_write_query_is_ignored() {
    let mut harness = create_data_source_harness();

    harness.data_source.edit_params(edit_command(
        None,
        None,
        Some(dataset(json!([{ "a": 1, "b": 2 }]))),
        json!({}),
    ));

    assert_eq!(harness.data_source.job_write_params().original_otl(), WRITE_OTL);
}

#[test]
fn extras_reach_both_param_sets() {
    let mut harness = create_data_source_harness();

    harness.data_source.edit_params(edit_command(
        Some("| readFile path=new"),
        None,
        None,
        json!({ "cache_ttl": 5, "timeout": 30 }),
    ));

    for params in [
        harness.data_source.job_params(),
        harness.data_source.job_write_params(),
    ] {
        assert_eq!(params.get("cache_ttl"), Some(&json!(5)));
        assert_eq!(params.get("timeout"), Some(&json!(30)));
    }
    assert_eq!(harness.data_source.job_write_params().original_otl(), WRITE_OTL);
}

#[test]
fn extra_original_otl_key_cannot_replace_the_query() {
    let mut harness = create_data_source_harness();

    harness.data_source.edit_params(edit_command(
        None,
        None,
        None,
        json!({ "original_otl": "| makeresults" }),
    ));

    assert_eq!(harness.data_source.job_params().original_otl(), READ_OTL);
    assert_eq!(harness.data_source.job_write_params().original_otl(), WRITE_OTL);
}

#[test]
fn otl_query_keeps_everything_but_line_breaks() {
    let query = OtlQuery::new("\n| search a=\"b\"\r\n  | table a\r");

    assert_eq!(query.value(), "| search a=\"b\"  | table a");
    assert_eq!(
        query.prefixed_with("| makeresults ").value(),
        "| makeresults | search a=\"b\"  | table a"
    );
}
