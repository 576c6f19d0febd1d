//! Top-level view selector: one screen per section, one active at a time.

use domain::{DomainError, Notifier, seed};
use serde::Serialize;

use crate::catalog::{CatalogScreen, CatalogView};
use crate::customers::{CustomerView, CustomersScreen};
use crate::orders::{OrderView, OrdersScreen};
use crate::supplier::{SupplierFormView, SupplierScreen};
use crate::view::ViewModel;

/// Dashboard sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Catalog,
    Suppliers,
    Orders,
    Customers,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Catalog,
        Section::Suppliers,
        Section::Orders,
        Section::Customers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Catalog => "catalog",
            Section::Suppliers => "suppliers",
            Section::Orders => "orders",
            Section::Customers => "customers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Catalog => "Product Catalog",
            Section::Suppliers => "Supplier Registration",
            Section::Orders => "Orders",
            Section::Customers => "Customers",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "section",
                value: s.to_string(),
            })
    }
}

/// The active section's view model.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", content = "view", rename_all = "lowercase")]
pub enum ScreenModel<'a> {
    Catalog(CatalogView<'a>),
    Suppliers(SupplierFormView<'a>),
    Orders(OrderView<'a>),
    Customers(CustomerView<'a>),
}

impl ScreenModel<'_> {
    pub fn section(&self) -> Section {
        match self {
            ScreenModel::Catalog(_) => Section::Catalog,
            ScreenModel::Suppliers(_) => Section::Suppliers,
            ScreenModel::Orders(_) => Section::Orders,
            ScreenModel::Customers(_) => Section::Customers,
        }
    }
}

impl ViewModel for ScreenModel<'_> {
    fn name(&self) -> &'static str {
        match self {
            ScreenModel::Catalog(view) => view.name(),
            ScreenModel::Suppliers(view) => view.name(),
            ScreenModel::Orders(view) => view.name(),
            ScreenModel::Customers(view) => view.name(),
        }
    }

    fn count(&self) -> usize {
        match self {
            ScreenModel::Catalog(view) => view.count(),
            ScreenModel::Suppliers(view) => view.count(),
            ScreenModel::Orders(view) => view.count(),
            ScreenModel::Customers(view) => view.count(),
        }
    }
}

/// Navigation entry for the section bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// The whole dashboard session.
///
/// Each screen's state is private to that screen; switching sections never
/// touches another screen's state.
pub struct Dashboard<N: Notifier + Clone> {
    active: Section,
    pub catalog: CatalogScreen<N>,
    pub suppliers: SupplierScreen<N>,
    pub orders: OrdersScreen,
    pub customers: CustomersScreen,
}

impl<N: Notifier + Clone> Dashboard<N> {
    /// Builds a dashboard over explicit data.
    pub fn new(
        products: Vec<domain::Product>,
        orders: Vec<domain::Order>,
        customers: Vec<domain::Customer>,
        notifier: N,
    ) -> Self {
        Self {
            active: Section::default(),
            catalog: CatalogScreen::new(products, notifier.clone()),
            suppliers: SupplierScreen::new(notifier),
            orders: OrdersScreen::new(orders),
            customers: CustomersScreen::new(customers),
        }
    }

    /// Builds a dashboard over the compiled-in seed data.
    pub fn with_seed_data(notifier: N) -> Self {
        Self::new(seed::products(), seed::orders(), seed::customers(), notifier)
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        tracing::debug!(from = %self.active, to = %section, "section selected");
        self.active = section;
    }

    pub fn navigation(&self) -> Vec<NavItem> {
        Section::ALL
            .into_iter()
            .map(|section| NavItem {
                key: section.key(),
                label: section.label(),
                active: section == self.active,
            })
            .collect()
    }

    /// Computes the active section's view model.
    pub fn render(&self) -> ScreenModel<'_> {
        metrics::counter!("dashboard_renders_total", "section" => self.active.key()).increment(1);
        let model = match self.active {
            Section::Catalog => ScreenModel::Catalog(self.catalog.view()),
            Section::Suppliers => ScreenModel::Suppliers(self.suppliers.view()),
            Section::Orders => ScreenModel::Orders(self.orders.view()),
            Section::Customers => ScreenModel::Customers(self.customers.view()),
        };
        tracing::debug!(view = model.name(), rows = model.count(), "rendered");
        model
    }
}
