//! Customer view: search, status partition and revenue aggregates.

use common::SearchQuery;
use domain::{Action, Customer, CustomerStatus, Money, Reducer};
use serde::Serialize;

use crate::orders::TabCount;
use crate::view::ViewModel;

/// Returns the customers whose name, email or company contains `query`,
/// in source order.
pub fn filter_customers<'a>(customers: &'a [Customer], query: &SearchQuery) -> Vec<&'a Customer> {
    customers
        .iter()
        .filter(|c| query.matches_any(c.searchable_fields()))
        .collect()
}

/// Aggregates over the whole customer collection. Search never affects these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub total_customers: usize,
    pub total_revenue: Money,
    pub total_orders: u64,
    /// `total_revenue / total_orders`, rounded to the cent; zero when there are no orders.
    pub average_order_value: Money,
    /// `average_order_value` rounded to whole dollars for the summary card.
    pub average_order_dollars: i64,
}

impl CustomerSummary {
    pub fn compute(customers: &[Customer]) -> Self {
        let total_revenue: Money = customers.iter().map(|c| c.total_spent).sum();
        let total_orders: u64 = customers.iter().map(|c| u64::from(c.total_orders)).sum();
        let average_order_value = total_revenue
            .divide_rounded(total_orders)
            .unwrap_or_default();

        Self {
            total_customers: customers.len(),
            total_revenue,
            total_orders,
            average_order_value,
            average_order_dollars: average_order_value.rounded_dollars(),
        }
    }
}

/// Tabs on the customer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTab {
    #[default]
    All,
    Active,
    Inactive,
}

impl CustomerTab {
    pub const ALL: [CustomerTab; 3] = [CustomerTab::All, CustomerTab::Active, CustomerTab::Inactive];

    pub fn key(&self) -> &'static str {
        match self {
            CustomerTab::All => "all",
            CustomerTab::Active => "active",
            CustomerTab::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerTab::All => "All Customers",
            CustomerTab::Active => "Active",
            CustomerTab::Inactive => "Inactive",
        }
    }
}

impl std::str::FromStr for CustomerTab {
    type Err = domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CustomerTab::All);
        }
        s.parse::<CustomerStatus>().map(|status| match status {
            CustomerStatus::Active => CustomerTab::Active,
            CustomerStatus::Inactive => CustomerTab::Inactive,
        })
    }
}

/// Customer screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomersState {
    pub query: SearchQuery,
    pub tab: CustomerTab,
}

/// Actions accepted by the customer screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomersAction {
    SetQuery(SearchQuery),
    SelectTab(CustomerTab),
}

impl Action for CustomersAction {
    fn action_type(&self) -> &'static str {
        match self {
            CustomersAction::SetQuery(_) => "SetQuery",
            CustomersAction::SelectTab(_) => "SelectTab",
        }
    }
}

impl Reducer for CustomersState {
    type Action = CustomersAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            CustomersAction::SetQuery(query) => self.query = query,
            CustomersAction::SelectTab(tab) => self.tab = tab,
        }
    }
}

/// Derived customer view.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerView<'a> {
    pub query: &'a str,
    pub tab: CustomerTab,
    /// Tab strip with counts over the search results.
    pub tabs: Vec<TabCount>,
    pub summary: CustomerSummary,
    /// Active customers among the search results (the "Active Customers" card).
    pub active_count: usize,
    pub filtered: Vec<&'a Customer>,
    pub active: Vec<&'a Customer>,
    pub inactive: Vec<&'a Customer>,
    pub is_empty: bool,
}

impl<'a> CustomerView<'a> {
    pub fn compute(customers: &'a [Customer], state: &'a CustomersState) -> Self {
        let filtered = filter_customers(customers, &state.query);
        let (active, inactive): (Vec<_>, Vec<_>) =
            filtered.iter().copied().partition(|c| c.status.is_active());
        tracing::debug!(
            query = %state.query,
            matched = filtered.len(),
            "customer view recomputed"
        );

        let tabs = CustomerTab::ALL
            .into_iter()
            .map(|tab| TabCount {
                key: tab.key(),
                label: tab.label(),
                count: match tab {
                    CustomerTab::All => filtered.len(),
                    CustomerTab::Active => active.len(),
                    CustomerTab::Inactive => inactive.len(),
                },
                selected: tab == state.tab,
            })
            .collect();

        Self {
            query: state.query.as_str(),
            tab: state.tab,
            tabs,
            summary: CustomerSummary::compute(customers),
            active_count: active.len(),
            is_empty: filtered.is_empty(),
            filtered,
            active,
            inactive,
        }
    }

    /// Returns the customers shown under the selected tab.
    pub fn selected(&self) -> &[&'a Customer] {
        match self.tab {
            CustomerTab::All => &self.filtered,
            CustomerTab::Active => &self.active,
            CustomerTab::Inactive => &self.inactive,
        }
    }
}

impl ViewModel for CustomerView<'_> {
    fn name(&self) -> &'static str {
        "CustomerView"
    }

    fn count(&self) -> usize {
        self.selected().len()
    }
}

/// The customer relationship screen.
pub struct CustomersScreen {
    customers: Vec<Customer>,
    state: CustomersState,
}

impl CustomersScreen {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            state: CustomersState::default(),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn state(&self) -> &CustomersState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CustomersAction) {
        tracing::debug!(action = action.action_type(), "customers action");
        self.state.apply(action);
    }

    pub fn view(&self) -> CustomerView<'_> {
        CustomerView::compute(&self.customers, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::seed;

    fn names<'a>(customers: &[&'a Customer]) -> Vec<&'a str> {
        customers.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_search_chen_finds_michael_chen() {
        let customers = seed::customers();
        let found = filter_customers(&customers, &"chen".into());
        assert_eq!(names(&found), ["Michael Chen"]);
    }

    #[test]
    fn test_empty_search_returns_all_in_order() {
        let customers = seed::customers();
        let found = filter_customers(&customers, &SearchQuery::default());
        assert_eq!(
            names(&found),
            ["John Smith", "Sarah Johnson", "Michael Chen", "Emma Wilson"]
        );
    }

    #[test]
    fn test_search_covers_email_and_company() {
        let customers = seed::customers();
        assert_eq!(
            names(&filter_customers(&customers, &"BUILDRIGHT".into())),
            ["Emma Wilson"]
        );
        assert_eq!(
            names(&filter_customers(&customers, &"greenmanufacturing.com".into())),
            ["Sarah Johnson"]
        );
        // location is not searched
        assert!(filter_customers(&customers, &"Chicago".into()).is_empty());
    }

    #[test]
    fn test_summary_over_seed() {
        let summary = CustomerSummary::compute(&seed::customers());
        assert_eq!(summary.total_customers, 4);
        assert_eq!(summary.total_revenue, Money::from_dollars(156_500));
        assert_eq!(summary.total_orders, 40);
        assert_eq!(summary.average_order_value, Money::from_cents(391_250));
        assert_eq!(summary.average_order_value.to_string(), "$3912.50");
        assert_eq!(summary.average_order_dollars, 3913);
    }

    #[test]
    fn test_average_falls_back_to_zero_without_orders() {
        let mut customers = seed::customers();
        for c in &mut customers {
            c.total_orders = 0;
        }
        let summary = CustomerSummary::compute(&customers);
        assert_eq!(summary.total_revenue, Money::from_dollars(156_500));
        assert_eq!(summary.average_order_value, Money::zero());
        assert_eq!(summary.average_order_dollars, 0);

        let empty = CustomerSummary::compute(&[]);
        assert_eq!(empty.total_customers, 0);
        assert_eq!(empty.average_order_value, Money::zero());
    }

    #[test]
    fn test_summary_ignores_search() {
        let mut screen = CustomersScreen::new(seed::customers());
        screen.dispatch(CustomersAction::SetQuery("emma".into()));
        let view = screen.view();
        assert_eq!(names(&view.filtered), ["Emma Wilson"]);
        assert_eq!(view.summary.total_customers, 4);
        assert_eq!(view.summary.total_revenue, Money::from_dollars(156_500));
    }

    #[test]
    fn test_filtered_results_partition_by_status() {
        let customers = seed::customers();
        let state = CustomersState::default();
        let view = CustomerView::compute(&customers, &state);
        assert_eq!(
            names(&view.active),
            ["John Smith", "Sarah Johnson", "Michael Chen"]
        );
        assert_eq!(names(&view.inactive), ["Emma Wilson"]);
        assert_eq!(view.active_count, 3);
        assert_eq!(view.active.len() + view.inactive.len(), view.filtered.len());
    }

    #[test]
    fn test_tabs_select_bucket() {
        let mut screen = CustomersScreen::new(seed::customers());
        screen.dispatch(CustomersAction::SelectTab(CustomerTab::Inactive));
        assert_eq!(screen.view().count(), 1);

        screen.dispatch(CustomersAction::SetQuery("smith".into()));
        let view = screen.view();
        assert_eq!(view.count(), 0);
        assert!(!view.is_empty);
        assert_eq!(view.active_count, 1);
    }

    #[test]
    fn test_tab_strip_counts_search_results() {
        let mut screen = CustomersScreen::new(seed::customers());
        screen.dispatch(CustomersAction::SelectTab(CustomerTab::Active));
        let view = screen.view();
        let strip: Vec<_> = view.tabs.iter().map(|t| (t.label, t.count, t.selected)).collect();
        assert_eq!(
            strip,
            [
                ("All Customers", 4, false),
                ("Active", 3, true),
                ("Inactive", 1, false),
            ]
        );

        screen.dispatch(CustomersAction::SetQuery("wilson".into()));
        let view = screen.view();
        let counts: Vec<_> = view.tabs.iter().map(|t| t.count).collect();
        assert_eq!(counts, [1, 0, 1]);
    }

    #[test]
    fn test_tab_parses_from_key() {
        assert_eq!("inactive".parse::<CustomerTab>().unwrap(), CustomerTab::Inactive);
        assert_eq!("ALL".parse::<CustomerTab>().unwrap(), CustomerTab::All);
        assert!("vip".parse::<CustomerTab>().is_err());
    }
}
