//! Product catalog entities.

use serde::{Deserialize, Serialize};

use crate::{DomainError, Money, ProductId, Rating};

/// Fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Industrial,
    Textiles,
    Electronics,
    Medical,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Industrial,
        Category::Textiles,
        Category::Electronics,
        Category::Medical,
    ];

    /// Returns the lowercase key used in filters and config.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Industrial => "industrial",
            Category::Textiles => "textiles",
            Category::Electronics => "electronics",
            Category::Medical => "medical",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Industrial => "Industrial",
            Category::Textiles => "Textiles",
            Category::Electronics => "Electronics",
            Category::Medical => "Medical",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::unknown("category", s))
    }
}

/// Category selection in the catalog filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "category")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable filter: `All` followed by each category.
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Returns true if a product in `category` passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// A product offered in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    pub supplier: String,
    pub rating: Rating,
    pub in_stock: bool,
    /// Minimum purchase quantity; every add-to-cart adds one batch of this size.
    pub min_order: u32,
}

impl Product {
    /// Returns the price of one minimum-order batch.
    pub fn batch_price(&self) -> Money {
        self.price.multiply(self.min_order)
    }

    /// Label for the add-to-cart control.
    pub fn cart_label(&self) -> &'static str {
        if self.in_stock {
            "Add to Cart"
        } else {
            "Out of Stock"
        }
    }
}
