//! End-to-end preparation of documents on disk.
//!
//! Every failure at the loading boundary must come back as a value,
//! never as a panic.

use pretty_assertions::assert_eq;
use sankey_core::prelude::*;
use sankey_core::{prepare_d3_sankey, LoadError};
use sankey_test_utils::{d3_document, income_statement_document, minimal_document, FixtureDir};
use serde_json::json;

#[test]
fn minimal_document_builds_expected_graph() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json("minimal.json", &minimal_document());

    let report = prepare_sankey(&path, &FlowConfig::default()).unwrap();

    assert_eq!(
        report.sankey.labels,
        vec!["A", "B", "Revenue", "Total Revenue", "NetIncome"]
    );
    assert_eq!(report.sankey.sources, vec![0, 1, 3]);
    assert_eq!(report.sankey.targets, vec![2, 2, 4]);
    assert_eq!(
        report.sankey.values,
        vec![Amount::from(10), Amount::from(20), Amount::from(5)]
    );
    assert_eq!(report.sankey.title, "Company Income Flow (Year)");
}

#[test]
fn income_statement_links_shared_revenue_node() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json("disney_2024.json", &income_statement_document());

    let report = prepare_sankey(&path, &FlowConfig::default()).unwrap();
    let graph = &report.graph;

    assert_eq!(report.sankey.title, "Disney Income Flow (2024)");
    assert_eq!(graph.index_of("Revenue"), Some(1));
    assert!((graph.inflow("Revenue") - 92_956.0).abs() < f64::EPSILON);
    assert!((graph.outflow("Revenue") - 90_981.0).abs() < f64::EPSILON);
    assert_eq!(graph.labels().last().map(String::as_str), Some("Net Income"));
}

#[test]
fn empty_sections_reported() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json("empty.json", &json!({"sections": {}}));

    let err = prepare_sankey(&path, &FlowConfig::default()).unwrap_err();
    assert!(matches!(err, FlowError::EmptySections));
}

#[test]
fn missing_sections_reported() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json("nosections.json", &json!({"company": "Disney"}));

    let err = prepare_sankey(&path, &FlowConfig::default()).unwrap_err();
    assert!(err.is_empty_sections());
}

#[test]
fn missing_file_reported() {
    let fixtures = FixtureDir::new();
    let path = fixtures.missing("nope.json");

    let err = prepare_sankey(&path, &FlowConfig::default()).unwrap_err();
    assert!(matches!(err, FlowError::Load(LoadError::NotFound { .. })));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_json_reported() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_text("broken.json", "{\"sections\": {\"Revenue\": ");

    let err = prepare_sankey(&path, &FlowConfig::default()).unwrap_err();
    assert!(matches!(err, FlowError::Load(LoadError::Malformed { .. })));
}

#[test]
fn non_object_top_level_reported() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_text("list.json", "[1, 2, 3]");

    let err = prepare_sankey(&path, &FlowConfig::default()).unwrap_err();
    match err {
        FlowError::Load(LoadError::Malformed { message, .. }) => {
            assert!(message.contains("array"), "unexpected message: {message}");
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn string_payload_contributes_zero_edges() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json(
        "mixed.json",
        &json!({"sections": {"Revenue": {"A": 10}, "Commentary": "strong year"}}),
    );

    let report = prepare_sankey(&path, &FlowConfig::default()).unwrap();
    assert_eq!(report.graph.edge_count(), 1);
    assert_eq!(report.graph.skipped()[0].category, "Commentary");
}

#[test]
fn yaml_document_matches_json() {
    let fixtures = FixtureDir::new();
    let json_path = fixtures.write_json("doc.json", &minimal_document());
    let yaml_path = fixtures.write_text(
        "doc.yaml",
        "sections:\n  Revenue:\n    A: 10\n    B: 20\n  NetIncome: 5\n",
    );

    let from_json = prepare_sankey(&json_path, &FlowConfig::default()).unwrap();
    let from_yaml = prepare_sankey(&yaml_path, &FlowConfig::default()).unwrap();

    assert_eq!(from_yaml.sankey, from_json.sankey);
}

#[test]
fn d3_document_prepares_projection() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json("d3.json", &d3_document());

    let data = prepare_d3_sankey(&path, &FlowConfig::default()).unwrap();

    assert_eq!(data.title, "Disney Income Flow (2024)");
    assert_eq!(data.labels.len(), 4);
    assert_eq!(data.sources, vec![0, 1, 2]);
    assert_eq!(data.targets, vec![2, 2, 3]);
    assert!(data.is_consistent());
}

#[test]
fn d3_out_of_range_link_reported() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json(
        "bad_d3.json",
        &json!({"nodes": [{"name": "A"}], "links": [{"source": 0, "target": 5, "value": 1}]}),
    );

    let err = prepare_d3_sankey(&path, &FlowConfig::default()).unwrap_err();
    assert!(matches!(err, FlowError::D3(_)));
}

#[test]
fn sections_document_is_not_a_d3_document() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json("sections.json", &minimal_document());

    let err = prepare_d3_sankey(&path, &FlowConfig::default()).unwrap_err();
    assert!(matches!(err, FlowError::Load(LoadError::Malformed { .. })));
}

#[test]
fn d3_document_without_meta_uses_config_defaults() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_json(
        "bare_d3.json",
        &json!({"nodes": [{"name": "A"}, {"name": "B"}], "links": [{"source": 0, "target": 1, "value": 3}]}),
    );
    let config = FlowConfig::default()
        .with_default_company("Acme")
        .with_default_year("FY25");

    let data = prepare_d3_sankey(&path, &config).unwrap();
    assert_eq!(data.title, "Acme Income Flow (FY25)");
}
