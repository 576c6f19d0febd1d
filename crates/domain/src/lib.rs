//! Domain layer for the TradeHub dashboard.
//!
//! This crate provides the entities and rules the derived views are built on:
//! - Product, Order and Customer entities with their closed enumerations
//! - Money, Rating and id value objects
//! - [`Reducer`] and [`Action`] traits for screen state
//! - [`Notifier`] collaborator for fire-and-forget confirmations
//! - Supplier registration form validation
//! - Compiled-in seed data

pub mod catalog;
pub mod customer;
pub mod error;
pub mod notify;
pub mod order;
pub mod reducer;
pub mod seed;
pub mod supplier;
pub mod value_objects;

pub use catalog::{Category, CategoryFilter, Product};
pub use customer::{Customer, CustomerStatus};
pub use error::DomainError;
pub use notify::{MemoryNotifier, Notification, Notifier, TracingNotifier};
pub use order::{
    BadgeVariant, LineItem, Order, OrderAction, OrderStatus, StatusColor, StatusIcon,
    StatusPresentation,
};
pub use reducer::{Action, Reducer};
pub use supplier::{
    BusinessType, Country, FieldIssue, SupplierApplication, SupplierField, SupplierForm,
};
pub use value_objects::{CustomerId, Money, OrderId, ProductId, Rating};
