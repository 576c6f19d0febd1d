//! Derived views and screen reducers for the dashboard.
//!
//! This crate turns domain entities plus per-screen state into view models:
//! - [`ViewModel`] trait implemented by every derived view
//! - Catalog, order, customer and supplier screens with their reducers
//! - [`Dashboard`] selector owning one screen per [`Section`]

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod selector;
pub mod supplier;
pub mod view;

pub use catalog::{
    Cart, CartSummary, CatalogAction, CatalogScreen, CatalogState, CatalogView, CategoryChoice,
    filter_products,
};
pub use customers::{
    CustomerSummary, CustomerTab, CustomerView, CustomersAction, CustomersScreen, CustomersState,
    filter_customers,
};
pub use orders::{
    LineView, OrderBuckets, OrderCard, OrderStats, OrderTab, OrderView, OrdersAction,
    OrdersScreen, OrdersState, TabCount, partition_orders, total_value,
};
pub use selector::{Dashboard, NavItem, ScreenModel, Section};
pub use supplier::{
    FieldView, SelectOption, SupplierAction, SupplierFormState, SupplierFormView, SupplierScreen,
};
pub use view::ViewModel;
