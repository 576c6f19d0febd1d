//! Customer relationship entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CustomerId, DomainError, Money};

/// Whether a customer is currently buying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CustomerStatus::Active)
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CustomerStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(CustomerStatus::Active),
            "inactive" => Ok(CustomerStatus::Inactive),
            _ => Err(DomainError::unknown("customer status", s)),
        }
    }
}

/// A buyer on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub total_orders: u32,
    pub total_spent: Money,
    pub status: CustomerStatus,
    pub last_order: NaiveDate,
}

impl Customer {
    /// Fields consulted by the customer search box.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [self.name.as_str(), self.email.as_str(), self.company.as_str()]
    }
}
