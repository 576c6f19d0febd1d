//! Command-line front end for the TradeHub dashboard.
//!
//! Builds a [`Dashboard`] over the seed data, applies the configured screen
//! state and renders the active section as JSON, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;

use domain::Notifier;
use serde::Serialize;
use views::{
    CatalogAction, CustomersAction, Dashboard, NavItem, OrdersAction, ScreenModel, ViewModel,
};

pub use config::{Config, TabSelection};
pub use error::{AppError, Result};

/// One rendered frame: the section bar plus the active screen.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub navigation: Vec<NavItem>,
    #[serde(flatten)]
    pub screen: ScreenModel<'a>,
}

/// Creates a seeded dashboard and applies the configured screen state.
pub fn build_dashboard<N: Notifier + Clone>(config: &Config, notifier: N) -> Dashboard<N> {
    let mut dashboard = Dashboard::with_seed_data(notifier);

    dashboard
        .catalog
        .dispatch(CatalogAction::SetQuery(config.query.clone()));
    dashboard
        .catalog
        .dispatch(CatalogAction::SelectCategory(config.category));
    dashboard
        .orders
        .dispatch(OrdersAction::SelectTab(config.tab.orders));
    dashboard
        .customers
        .dispatch(CustomersAction::SetQuery(config.query.clone()));
    dashboard
        .customers
        .dispatch(CustomersAction::SelectTab(config.tab.customers));
    dashboard.select(config.section);

    dashboard
}

/// Renders the active section.
pub fn render_frame<N: Notifier + Clone>(dashboard: &Dashboard<N>) -> Frame<'_> {
    Frame {
        navigation: dashboard.navigation(),
        screen: dashboard.render(),
    }
}

/// Renders the active section as pretty-printed JSON.
pub fn render_json<N: Notifier + Clone>(dashboard: &Dashboard<N>) -> Result<String> {
    let frame = render_frame(dashboard);
    tracing::info!(
        section = %dashboard.active(),
        view = frame.screen.name(),
        rows = frame.screen.count(),
        "rendering dashboard"
    );
    Ok(serde_json::to_string_pretty(&frame)?)
}
