//! Shared primitives for the TradeHub dashboard views.

pub mod types;

pub use types::SearchQuery;
