//! Order entity and related types.

mod presentation;
mod state;

pub use presentation::{BadgeVariant, OrderAction, StatusColor, StatusIcon, StatusPresentation};
pub use state::OrderStatus;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Money, OrderId};

/// A line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Human-readable product name.
    pub name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit.
    pub price: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Returns the display subtotal for this line (price * quantity).
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// An order placed with a supplier.
///
/// `total` is stored as recorded, independently of the line items. It is
/// never recomputed; [`Order::line_items_total`] exposes the line sum so the
/// two can be compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub products: Vec<LineItem>,
    pub supplier: String,
    pub status: OrderStatus,
    pub total: Money,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
}

impl Order {
    /// Returns the sum of line subtotals.
    pub fn line_items_total(&self) -> Money {
        self.products.iter().map(LineItem::subtotal).sum()
    }

    /// Returns true if the stored total equals the line sum.
    pub fn is_reconciled(&self) -> bool {
        self.total == self.line_items_total()
    }
}
