//! Application configuration loaded from environment variables.

use std::str::FromStr;

use common::SearchQuery;
use domain::{CategoryFilter, DomainError};
use views::{CustomerTab, OrderTab, Section};

use crate::error::{AppError, Result};

/// Dashboard configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DASHBOARD_SECTION`: section to render (default: `catalog`)
/// - `DASHBOARD_QUERY`: search text for the catalog and customer screens (default: empty)
/// - `DASHBOARD_CATEGORY`: catalog category filter (default: `all`)
/// - `DASHBOARD_TAB`: order or customer tab (default: `all`)
/// - `DASHBOARD_EMIT_METRICS`: write the Prometheus snapshot to stderr (default: `false`)
/// - `RUST_LOG`: tracing filter directive (default: `info`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub section: Section,
    pub query: SearchQuery,
    pub category: CategoryFilter,
    pub tab: TabSelection,
    pub emit_metrics: bool,
    pub log_level: String,
}

/// `DASHBOARD_TAB` resolved against both tabbed screens.
///
/// A key only one screen knows (`pending`, `active`) leaves the other on All.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelection {
    pub orders: OrderTab,
    pub customers: CustomerTab,
}

impl FromStr for TabSelection {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let orders = s.parse::<OrderTab>();
        let customers = s.parse::<CustomerTab>();
        if orders.is_err() && customers.is_err() {
            return Err(DomainError::UnknownVariant {
                kind: "tab",
                value: s.to_string(),
            });
        }
        Ok(Self {
            orders: orders.unwrap_or_default(),
            customers: customers.unwrap_or_default(),
        })
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            section: parse_var(&lookup, "DASHBOARD_SECTION", defaults.section)?,
            query: lookup("DASHBOARD_QUERY").map(SearchQuery::new).unwrap_or_default(),
            category: parse_var(&lookup, "DASHBOARD_CATEGORY", defaults.category)?,
            tab: parse_var(&lookup, "DASHBOARD_TAB", defaults.tab)?,
            emit_metrics: parse_flag(&lookup, "DASHBOARD_EMIT_METRICS")?,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            section: Section::Catalog,
            query: SearchQuery::default(),
            category: CategoryFilter::All,
            tab: TabSelection::default(),
            emit_metrics: false,
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T>
where
    T: FromStr<Err = DomainError>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|source| AppError::Config { var, source }),
        _ => Ok(default),
    }
}

fn parse_flag(lookup: impl Fn(&str) -> Option<String>, var: &'static str) -> Result<bool> {
    let Some(value) = lookup(var) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        _ => Err(AppError::ConfigFlag { var, value }),
    }
}
