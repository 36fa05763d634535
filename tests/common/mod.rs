//! Shared helpers for tests that run against a mocked Snipe-IT API

#![allow(dead_code)]

use secrecy::SecretString;
use serde_json::{json, Value};
use snipeit_exporter::config::{Config, MetricsConfig, SnipeItConfig};
use snipeit_exporter::snipeit::SnipeItClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

pub fn snipeit_config(server: &MockServer) -> SnipeItConfig {
    SnipeItConfig {
        url: server.uri(),
        api_key: SecretString::from(API_KEY),
        verify_ssl: true,
    }
}

pub fn metrics_config(statuses: &[&str], categories: &[&str]) -> MetricsConfig {
    MetricsConfig {
        asset_statuses: statuses.iter().map(|s| s.to_string()).collect(),
        asset_categories: categories.iter().map(|s| s.to_string()).collect(),
        ..MetricsConfig::default()
    }
}

pub fn config_for(server: &MockServer, metrics: MetricsConfig) -> Config {
    Config {
        snipeit: snipeit_config(server),
        metrics,
        ..Config::default()
    }
}

pub fn client_for(server: &MockServer) -> SnipeItClient {
    SnipeItClient::new(&snipeit_config(server), 1000).expect("Failed to build client")
}

/// Serve `{"total": n, "rows": rows}` on `/api/v1/{endpoint}`
pub async fn mount_rows(server: &MockServer, endpoint: &str, rows: Value) {
    let total = rows.as_array().map(|r| r.len()).unwrap_or(0);
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/{}", endpoint)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": total,
            "rows": rows,
        })))
        .mount(server)
        .await;
}

pub async fn mount_models(server: &MockServer, category_id: u64, rows: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/models"))
        .and(query_param("category_id", category_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": rows })))
        .mount(server)
        .await;
}

pub async fn mount_hardware_total(server: &MockServer, model_id: u64, status_id: u64, total: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/hardware"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "0"))
        .and(query_param("model_id", model_id.to_string()))
        .and(query_param("status_id", status_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": total,
            "rows": [],
        })))
        .mount(server)
        .await;
}

/// One status ("Ready to Deploy", id 1), one category ("Laptops", id 10) with
/// one model ("ThinkPad", TP1, id 100) holding three assets
pub async fn mount_single_laptop_inventory(server: &MockServer) {
    mount_rows(
        server,
        "statuslabels",
        json!([
            {"id": 1, "name": "Ready to Deploy", "assets_count": 3},
            {"id": 2, "name": "Archived", "assets_count": 40}
        ]),
    )
    .await;
    mount_rows(
        server,
        "categories",
        json!([
            {"id": 10, "name": "Laptops"},
            {"id": 11, "name": "Monitors"}
        ]),
    )
    .await;
    mount_models(
        server,
        10,
        json!([{"id": 100, "name": "ThinkPad", "model_number": "TP1"}]),
    )
    .await;
    mount_hardware_total(server, 100, 1, 3).await;
}
