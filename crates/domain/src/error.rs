//! Domain error types.

use thiserror::Error;

use crate::supplier::FieldIssue;

/// Errors that can occur at the edges of the domain.
///
/// The view computations themselves are total; these errors only arise when
/// parsing user-facing keys, guarding cart actions, or validating the supplier
/// registration form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A string did not name any variant of a closed enumeration.
    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// A rating was outside 0.0..=5.0 or not finite.
    #[error("Invalid rating: {0} (must be between 0 and 5)")]
    InvalidRating(f32),

    /// No product with the given id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product cannot be added to the cart because it is out of stock.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// The supplier registration form failed validation.
    #[error("Invalid registration: {}", format_issues(.0))]
    InvalidRegistration(Vec<FieldIssue>),
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        DomainError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}
