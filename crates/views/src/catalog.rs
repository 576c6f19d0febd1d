//! Catalog view: product search, category filter and cart.

use std::collections::BTreeMap;

use common::SearchQuery;
use domain::{
    Action, CategoryFilter, DomainError, Money, Notification, Notifier, Product, ProductId,
    Reducer,
};
use serde::Serialize;

use crate::view::ViewModel;

/// Returns the products matching `query` (name or description) and `category`,
/// in source order.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &SearchQuery,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.admits(p.category))
        .filter(|p| query.matches_any([p.name.as_str(), p.description.as_str()]))
        .collect()
}

/// Requested quantities keyed by product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<ProductId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one minimum-order batch for `product_id` and returns the new quantity.
    ///
    /// No stock or upper-bound check happens here.
    pub fn add(&mut self, product_id: ProductId, min_order: u32) -> u32 {
        let quantity = self.entries.entry(product_id).or_insert(0);
        *quantity = quantity.saturating_add(min_order);
        *quantity
    }

    /// Returns the quantity requested for a product (0 if absent).
    pub fn quantity(&self, product_id: &ProductId) -> u32 {
        self.entries.get(product_id).copied().unwrap_or(0)
    }

    /// Number of distinct products in the cart.
    pub fn lines(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all requested quantities.
    pub fn units(&self) -> u64 {
        self.entries.values().map(|q| u64::from(*q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Value of the cart at list price. Entries with no matching product are skipped.
    pub fn value(&self, products: &[Product]) -> Money {
        products
            .iter()
            .map(|p| p.price.multiply(self.quantity(&p.id)))
            .sum()
    }
}

/// Catalog screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub query: SearchQuery,
    pub category: CategoryFilter,
    pub cart: Cart,
}

/// Actions accepted by the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SetQuery(SearchQuery),
    SelectCategory(CategoryFilter),
    AddToCart { product_id: ProductId, min_order: u32 },
    ClearCart,
}

impl Action for CatalogAction {
    fn action_type(&self) -> &'static str {
        match self {
            CatalogAction::SetQuery(_) => "SetQuery",
            CatalogAction::SelectCategory(_) => "SelectCategory",
            CatalogAction::AddToCart { .. } => "AddToCart",
            CatalogAction::ClearCart => "ClearCart",
        }
    }
}

impl Reducer for CatalogState {
    type Action = CatalogAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            CatalogAction::SetQuery(query) => self.query = query,
            CatalogAction::SelectCategory(category) => self.category = category,
            CatalogAction::AddToCart {
                product_id,
                min_order,
            } => {
                self.cart.add(product_id, min_order);
            }
            CatalogAction::ClearCart => self.cart.clear(),
        }
    }
}

/// One entry in the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChoice {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Cart badge contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: usize,
    pub units: u64,
    pub value: Money,
}

/// Derived catalog view.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub query: &'a str,
    pub category: CategoryFilter,
    pub categories: Vec<CategoryChoice>,
    pub products: Vec<&'a Product>,
    pub cart: CartSummary,
    /// True when no product matches; the screen shows "No products found".
    pub is_empty: bool,
}

impl<'a> CatalogView<'a> {
    /// Computes the view from the full catalog and the current screen state.
    pub fn compute(products: &'a [Product], state: &'a CatalogState) -> Self {
        let visible = filter_products(products, &state.query, state.category);
        tracing::debug!(
            query = %state.query,
            category = state.category.key(),
            visible = visible.len(),
            "catalog view recomputed"
        );

        let categories = CategoryFilter::choices()
            .into_iter()
            .map(|choice| CategoryChoice {
                key: choice.key(),
                label: choice.label(),
                selected: choice == state.category,
            })
            .collect();

        Self {
            query: state.query.as_str(),
            category: state.category,
            categories,
            is_empty: visible.is_empty(),
            products: visible,
            cart: CartSummary {
                lines: state.cart.lines(),
                units: state.cart.units(),
                value: state.cart.value(products),
            },
        }
    }
}

impl ViewModel for CatalogView<'_> {
    fn name(&self) -> &'static str {
        "CatalogView"
    }

    fn count(&self) -> usize {
        self.products.len()
    }
}

/// The product catalog screen: seed products plus exclusively owned state.
pub struct CatalogScreen<N: Notifier> {
    products: Vec<Product>,
    state: CatalogState,
    notifier: N,
}

impl<N: Notifier> CatalogScreen<N> {
    /// Creates a screen over the given products with empty state.
    pub fn new(products: Vec<Product>, notifier: N) -> Self {
        Self {
            products,
            state: CatalogState::default(),
            notifier,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Applies an action to the screen state.
    pub fn dispatch(&mut self, action: CatalogAction) {
        tracing::debug!(action = action.action_type(), "catalog action");
        self.state.apply(action);
    }

    /// Adds one minimum-order batch of a product to the cart.
    ///
    /// This is the add-to-cart control: unknown and out-of-stock products are
    /// refused here, before the reducer sees the action. On success a
    /// confirmation is sent and the new cart quantity returned.
    #[tracing::instrument(skip(self), fields(product_id = %product_id))]
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<u32, DomainError> {
        let Some(product) = self.products.iter().find(|p| &p.id == product_id) else {
            metrics::counter!("catalog_cart_rejections_total").increment(1);
            tracing::warn!("add to cart refused: unknown product");
            return Err(DomainError::ProductNotFound(product_id.to_string()));
        };
        if !product.in_stock {
            metrics::counter!("catalog_cart_rejections_total").increment(1);
            tracing::warn!(product = %product.name, "add to cart refused: out of stock");
            return Err(DomainError::OutOfStock(product.name.clone()));
        }

        let min_order = product.min_order;
        self.dispatch(CatalogAction::AddToCart {
            product_id: product_id.clone(),
            min_order,
        });
        metrics::counter!("catalog_cart_additions_total").increment(1);

        self.notifier.notify(Notification::new(
            "Added to Cart",
            format!("{min_order} units added to your cart"),
        ));

        Ok(self.state.cart.quantity(product_id))
    }

    /// Computes the current view.
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::compute(&self.products, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Category, MemoryNotifier, seed};

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_and_all_returns_everything_in_order() {
        let products = seed::products();
        let visible = filter_products(&products, &SearchQuery::default(), CategoryFilter::All);
        assert_eq!(visible.len(), products.len());
        assert!(visible.iter().zip(&products).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_query_matches_name_or_description_case_insensitively() {
        let products = seed::products();

        let visible = filter_products(&products, &"PIPES".into(), CategoryFilter::All);
        assert_eq!(names(&visible), ["Industrial Steel Pipes"]);

        // "sterile" only appears in a description
        let visible = filter_products(&products, &"sterile".into(), CategoryFilter::All);
        assert_eq!(names(&visible), ["Pharmaceutical Grade Bottles"]);

        // "manufacturing" only appears in the cotton description
        let visible = filter_products(&products, &"Manufacturing".into(), CategoryFilter::All);
        assert_eq!(names(&visible), ["Organic Cotton Fabric"]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let products = seed::products();

        let visible = filter_products(
            &products,
            &SearchQuery::default(),
            CategoryFilter::Only(Category::Electronics),
        );
        assert_eq!(names(&visible), ["Electronic Components Kit"]);

        let visible = filter_products(
            &products,
            &"steel".into(),
            CategoryFilter::Only(Category::Textiles),
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_is_an_order_preserving_subsequence() {
        let products = seed::products();
        for query in ["", "e", "al", "for", "zzz"] {
            for category in CategoryFilter::choices() {
                let visible = filter_products(&products, &query.into(), category);
                let positions: Vec<_> = visible
                    .iter()
                    .map(|v| products.iter().position(|p| p.id == v.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
                for p in &visible {
                    assert!(category.admits(p.category));
                    let q = query.to_lowercase();
                    assert!(
                        p.name.to_lowercase().contains(&q)
                            || p.description.to_lowercase().contains(&q)
                    );
                }
            }
        }
    }

    #[test]
    fn test_add_to_cart_accumulates_min_order_batches() {
        let mut cart = Cart::new();
        let id = ProductId::new("1");
        assert_eq!(cart.add(id.clone(), 50), 50);
        assert_eq!(cart.add(id.clone(), 50), 100);
        assert_eq!(cart.quantity(&id), 100);
        assert_eq!(cart.quantity(&ProductId::new("2")), 0);
    }

    #[test]
    fn test_cart_totals() {
        let products = seed::products();
        let mut cart = Cart::new();
        cart.add(ProductId::new("1"), 50);
        cart.add(ProductId::new("4"), 500);
        cart.add(ProductId::new("missing"), 7);

        assert_eq!(cart.lines(), 3);
        assert_eq!(cart.units(), 557);
        // 50 * 120.00 + 500 * 2.50
        assert_eq!(cart.value(&products), Money::from_dollars(7250));
    }

    #[test]
    fn test_reducer_does_not_enforce_stock() {
        let state = CatalogState::default().reduce(CatalogAction::AddToCart {
            product_id: ProductId::new("3"),
            min_order: 10,
        });
        assert_eq!(state.cart.quantity(&ProductId::new("3")), 10);
    }

    #[test]
    fn test_reducer_updates_filters_and_clears_cart() {
        let mut state = CatalogState::default();
        state.apply_all([
            CatalogAction::SetQuery("cotton".into()),
            CatalogAction::SelectCategory(CategoryFilter::Only(Category::Textiles)),
            CatalogAction::AddToCart {
                product_id: ProductId::new("2"),
                min_order: 100,
            },
        ]);
        assert_eq!(state.query.as_str(), "cotton");
        assert_eq!(state.category, CategoryFilter::Only(Category::Textiles));
        assert_eq!(state.cart.units(), 100);

        state.apply(CatalogAction::ClearCart);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_screen_add_to_cart_notifies() {
        let notifier = MemoryNotifier::new();
        let mut screen = CatalogScreen::new(seed::products(), notifier.clone());

        assert_eq!(screen.add_to_cart(&ProductId::new("1")).unwrap(), 50);
        assert_eq!(screen.add_to_cart(&ProductId::new("1")).unwrap(), 100);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].title, "Added to Cart");
        assert_eq!(sent[0].description, "50 units added to your cart");
    }

    #[test]
    fn test_screen_refuses_out_of_stock_and_unknown_products() {
        let notifier = MemoryNotifier::new();
        let mut screen = CatalogScreen::new(seed::products(), notifier.clone());

        assert_eq!(
            screen.add_to_cart(&ProductId::new("3")),
            Err(DomainError::OutOfStock("Electronic Components Kit".to_string()))
        );
        assert_eq!(
            screen.add_to_cart(&ProductId::new("99")),
            Err(DomainError::ProductNotFound("99".to_string()))
        );
        assert!(screen.state().cart.is_empty());
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn test_view_reports_cart_and_choices() {
        let mut screen = CatalogScreen::new(seed::products(), MemoryNotifier::new());
        screen.add_to_cart(&ProductId::new("2")).unwrap();
        screen.dispatch(CatalogAction::SelectCategory(CategoryFilter::Only(
            Category::Medical,
        )));

        let view = screen.view();
        assert_eq!(view.count(), 1);
        assert_eq!(view.name(), "CatalogView");
        assert!(!view.is_empty);
        assert_eq!(view.cart.units, 100);
        assert_eq!(view.cart.value, Money::from_dollars(1550));
        let selected: Vec<_> = view.categories.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key, "medical");
    }

    #[test]
    fn test_view_flags_no_results() {
        let mut screen = CatalogScreen::new(seed::products(), MemoryNotifier::new());
        screen.dispatch(CatalogAction::SetQuery("titanium".into()));
        let view = screen.view();
        assert!(view.is_empty);
        assert_eq!(view.count(), 0);
    }

    #[test]
    fn test_view_serializes_for_rendering() {
        let screen = CatalogScreen::new(seed::products(), MemoryNotifier::new());
        let json = serde_json::to_value(screen.view()).unwrap();
        assert_eq!(json["products"].as_array().unwrap().len(), 4);
        assert_eq!(json["products"][0]["name"], "Industrial Steel Pipes");
        assert_eq!(json["category"]["kind"], "all");
        assert_eq!(json["cart"]["units"], 0);
    }
}
