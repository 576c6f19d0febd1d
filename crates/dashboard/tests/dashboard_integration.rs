//! Integration tests for the dashboard front end.

use std::collections::HashMap;
use std::sync::OnceLock;

use dashboard::{AppError, Config};
use domain::{MemoryNotifier, ProductId};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use views::Section;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn config(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

fn render(config: &Config) -> serde_json::Value {
    let dashboard = dashboard::build_dashboard(config, MemoryNotifier::new());
    let json = dashboard::render_json(&dashboard).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_default_renders_catalog() {
    let json = render(&Config::default());

    assert_eq!(json["section"], "catalog");
    assert_eq!(json["view"]["products"].as_array().unwrap().len(), 4);
    assert_eq!(json["view"]["is_empty"], false);

    let nav = json["navigation"].as_array().unwrap();
    assert_eq!(nav.len(), 4);
    assert_eq!(nav[0]["label"], "Product Catalog");
    assert_eq!(nav[0]["active"], true);
}

#[test]
fn test_query_and_category_filter_catalog() {
    let json = render(&config(&[
        ("DASHBOARD_QUERY", "fabric"),
        ("DASHBOARD_CATEGORY", "textiles"),
    ]));

    let products = json["view"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Organic Cotton Fabric");
}

#[test]
fn test_orders_tab_from_config() {
    let json = render(&config(&[
        ("DASHBOARD_SECTION", "orders"),
        ("DASHBOARD_TAB", "pending"),
    ]));

    assert_eq!(json["section"], "orders");
    assert_eq!(json["view"]["stats"]["total_orders"], 3);
    let orders = json["view"]["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["order"]["id"], "ORD-003");
    assert_eq!(orders[0]["presentation"]["icon"], "clock");
    assert!(json["view"]["empty_message"].is_null());
}

#[test]
fn test_customers_query_is_shared_with_catalog_config() {
    let json = render(&config(&[
        ("DASHBOARD_SECTION", "customers"),
        ("DASHBOARD_QUERY", "chen"),
        ("DASHBOARD_TAB", "active"),
    ]));

    let filtered = json["view"]["filtered"].as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["name"], "Michael Chen");
    assert_eq!(json["view"]["summary"]["total_customers"], 4);
}

#[test]
fn test_supplier_section_lists_form() {
    let json = render(&config(&[("DASHBOARD_SECTION", "suppliers")]));

    assert_eq!(json["view"]["fields"].as_array().unwrap().len(), 11);
    assert_eq!(json["view"]["can_submit"], false);
}

#[test]
fn test_invalid_config_is_reported() {
    let err = Config::from_lookup(|key| {
        (key == "DASHBOARD_CATEGORY").then(|| "furniture".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Config { var: "DASHBOARD_CATEGORY", .. }));
}

#[test]
fn test_metrics_recorded() {
    let handle = get_metrics_handle();

    let mut dashboard = dashboard::build_dashboard(&Config::default(), MemoryNotifier::new());
    dashboard.catalog.add_to_cart(&ProductId::new("1")).unwrap();
    dashboard.catalog.add_to_cart(&ProductId::new("3")).unwrap_err();
    dashboard.select(Section::Orders);
    dashboard::render_json(&dashboard).unwrap();

    let snapshot = handle.render();
    assert!(snapshot.contains("catalog_cart_additions_total"));
    assert!(snapshot.contains("catalog_cart_rejections_total"));
    assert!(snapshot.contains("dashboard_renders_total"));
    assert!(snapshot.contains("section=\"orders\""));
}
