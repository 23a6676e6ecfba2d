use clap::Parser;
use records::EntityKind;
use serde_json::json;

use super::*;

#[test]
fn base_url_drops_trailing_slashes() {
    assert_eq!(normalize_base_url("http://127.0.0.1:3000/").unwrap(), "http://127.0.0.1:3000");
    assert_eq!(normalize_base_url(" https://admin.example.com// ").unwrap(), "https://admin.example.com");
}

#[test]
fn base_url_requires_http_scheme() {
    assert!(matches!(normalize_base_url("localhost:3000"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn record_paths_use_kind_slugs() {
    assert_eq!(collection_path(EntityKind::AdType), "/api/records/ad-types");
    assert_eq!(record_path(EntityKind::Email, "n001"), "/api/records/emails/n001");
}

#[test]
fn kind_parser_accepts_slugs_and_lists_them_on_error() {
    assert_eq!(parse_kind("promotion-powers"), Ok(EntityKind::PromotionPower));
    let err = parse_kind("widgets").unwrap_err();
    assert!(err.contains("widgets"));
    assert!(err.contains("ad-types"));
    assert!(err.contains("emails"));
}

#[test]
fn records_update_parses_from_argv() {
    let cli = Cli::try_parse_from([
        "admin-cli",
        "--base-url",
        "http://localhost:4000",
        "records",
        "categories",
        "update",
        "cat2",
        "--data",
        r#"{"name":"Phones"}"#,
    ])
    .unwrap();

    assert_eq!(cli.base_url, "http://localhost:4000");
    let Command::Records(records) = cli.command else {
        panic!("expected records command");
    };
    assert_eq!(records.kind, EntityKind::Category);
    assert!(matches!(records.command, RecordsSubcommand::Update { ref id, .. } if id == "cat2"));
}

#[test]
fn unknown_kind_is_rejected_by_clap() {
    let result = Cli::try_parse_from(["admin-cli", "records", "widgets", "list"]);
    assert!(result.is_err());
}

#[test]
fn payload_must_be_an_object() {
    assert!(matches!(parse_payload(EntityKind::Category, "[1, 2]"), Err(CliError::NotAnObject)));
    assert!(matches!(parse_payload(EntityKind::Category, "{name"), Err(CliError::InvalidJson(_))));
}

#[test]
fn payload_runs_field_validation() {
    let err = parse_payload(EntityKind::Category, r#"{"name":"  "}"#).unwrap_err();
    assert_eq!(err.to_string(), "Category name cannot be empty.");

    let err = parse_payload(EntityKind::AdType, r#"{"name":"Banner","price":-1}"#).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid positive price.");

    let err = parse_payload(EntityKind::AdType, r#"{"price":5}"#).unwrap_err();
    assert_eq!(err.to_string(), "Ad name cannot be empty.");
}

#[test]
fn payload_is_normalized_before_sending() {
    let value = parse_payload(EntityKind::AdType, r#"{"id":"9","name":" Banner ","price":500}"#).unwrap();
    assert_eq!(value, json!({ "name": "Banner", "price": 500, "currency": "NGN" }));

    let value = parse_payload(EntityKind::Category, r#"{"name":"Shoes","parentName":"  "}"#).unwrap();
    assert_eq!(value, json!({ "name": "Shoes", "parentName": null }));
}

#[test]
fn error_message_prefers_error_body() {
    assert_eq!(error_message(r#"{"error":"record not found"}"#), "record not found");
    assert_eq!(error_message("  gateway timeout \n"), "gateway timeout");
}
