//! Order view: status buckets, summary statistics and per-order presentation.

use domain::{Action, Money, Order, OrderStatus, Reducer, StatusPresentation};
use serde::Serialize;

use crate::view::ViewModel;

/// Orders partitioned by status. `all` repeats every order; the four status
/// buckets are disjoint and together cover the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderBuckets<'a> {
    pub all: Vec<&'a Order>,
    pub pending: Vec<&'a Order>,
    pub confirmed: Vec<&'a Order>,
    pub shipped: Vec<&'a Order>,
    pub delivered: Vec<&'a Order>,
}

impl<'a> OrderBuckets<'a> {
    /// Returns the bucket for one status.
    pub fn status(&self, status: OrderStatus) -> &[&'a Order] {
        match status {
            OrderStatus::Pending => &self.pending,
            OrderStatus::Confirmed => &self.confirmed,
            OrderStatus::Shipped => &self.shipped,
            OrderStatus::Delivered => &self.delivered,
        }
    }

    /// Returns the bucket behind a tab.
    pub fn tab(&self, tab: OrderTab) -> &[&'a Order] {
        match tab {
            OrderTab::All => &self.all,
            OrderTab::Status(status) => self.status(status),
        }
    }
}

/// Partitions orders into the five buckets, preserving source order.
pub fn partition_orders(orders: &[Order]) -> OrderBuckets<'_> {
    let mut buckets = OrderBuckets::default();
    for order in orders {
        buckets.all.push(order);
        match order.status {
            OrderStatus::Pending => buckets.pending.push(order),
            OrderStatus::Confirmed => buckets.confirmed.push(order),
            OrderStatus::Shipped => buckets.shipped.push(order),
            OrderStatus::Delivered => buckets.delivered.push(order),
        }
    }
    buckets
}

/// Sum of the stored `total` of every order.
pub fn total_value(orders: &[Order]) -> Money {
    orders.iter().map(|o| o.total).sum()
}

/// Summary cards shown above the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub total_value: Money,
    pub pending: usize,
    pub shipped: usize,
}

impl OrderStats {
    pub fn compute(orders: &[Order], buckets: &OrderBuckets<'_>) -> Self {
        Self {
            total_orders: orders.len(),
            total_value: total_value(orders),
            pending: buckets.pending.len(),
            shipped: buckets.shipped.len(),
        }
    }
}

/// Tabs on the order screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "status")]
pub enum OrderTab {
    #[default]
    All,
    Status(OrderStatus),
}

impl OrderTab {
    /// Every tab, in display order.
    pub fn choices() -> Vec<OrderTab> {
        std::iter::once(OrderTab::All)
            .chain(OrderStatus::ALL.into_iter().map(OrderTab::Status))
            .collect()
    }

    pub fn key(&self) -> &'static str {
        match self {
            OrderTab::All => "all",
            OrderTab::Status(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderTab::All => "All Orders",
            OrderTab::Status(status) => status.label(),
        }
    }

    /// Message shown when the tab's bucket is empty.
    pub fn empty_message(&self) -> String {
        match self {
            OrderTab::All => "You haven't placed any orders yet".to_string(),
            OrderTab::Status(status) => format!("No {status} orders"),
        }
    }
}

impl std::str::FromStr for OrderTab {
    type Err = domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(OrderTab::All);
        }
        s.parse().map(OrderTab::Status)
    }
}

/// Order screen state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdersState {
    pub tab: OrderTab,
}

/// Actions accepted by the order screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersAction {
    SelectTab(OrderTab),
}

impl Action for OrdersAction {
    fn action_type(&self) -> &'static str {
        match self {
            OrdersAction::SelectTab(_) => "SelectTab",
        }
    }
}

impl Reducer for OrdersState {
    type Action = OrdersAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            OrdersAction::SelectTab(tab) => self.tab = tab,
        }
    }
}

/// One line on an order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView<'a> {
    pub name: &'a str,
    pub quantity: u32,
    pub subtotal: Money,
}

/// One order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderCard<'a> {
    pub order: &'a Order,
    pub presentation: StatusPresentation,
    pub lines: Vec<LineView<'a>>,
    /// Sum of line subtotals; shown alongside, never substituted for, `order.total`.
    pub line_items_total: Money,
    pub reconciled: bool,
}

impl<'a> OrderCard<'a> {
    pub fn new(order: &'a Order) -> Self {
        let line_items_total = order.line_items_total();
        let reconciled = line_items_total == order.total;
        if !reconciled {
            tracing::debug!(
                order_id = %order.id,
                stored = %order.total,
                lines = %line_items_total,
                "order total differs from line items"
            );
        }
        Self {
            order,
            presentation: order.status.presentation(),
            lines: order
                .products
                .iter()
                .map(|line| LineView {
                    name: &line.name,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
            line_items_total,
            reconciled,
        }
    }
}

/// Per-tab counts for the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabCount {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub selected: bool,
}

/// Derived order view.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView<'a> {
    pub stats: OrderStats,
    pub tab: OrderTab,
    pub tabs: Vec<TabCount>,
    pub orders: Vec<OrderCard<'a>>,
    /// Set when the selected tab has no orders.
    pub empty_message: Option<String>,
    #[serde(skip)]
    pub buckets: OrderBuckets<'a>,
}

impl<'a> OrderView<'a> {
    pub fn compute(orders: &'a [Order], state: &OrdersState) -> Self {
        let buckets = partition_orders(orders);
        let stats = OrderStats::compute(orders, &buckets);
        let selected = buckets.tab(state.tab);
        tracing::debug!(tab = state.tab.key(), visible = selected.len(), "order view recomputed");

        let tabs = OrderTab::choices()
            .into_iter()
            .map(|tab| TabCount {
                key: tab.key(),
                label: tab.label(),
                count: buckets.tab(tab).len(),
                selected: tab == state.tab,
            })
            .collect();

        let cards: Vec<_> = selected.iter().copied().map(OrderCard::new).collect();
        let empty_message = cards.is_empty().then(|| state.tab.empty_message());

        Self {
            stats,
            tab: state.tab,
            tabs,
            orders: cards,
            empty_message,
            buckets,
        }
    }
}

impl ViewModel for OrderView<'_> {
    fn name(&self) -> &'static str {
        "OrderView"
    }

    fn count(&self) -> usize {
        self.orders.len()
    }
}

/// The order tracking screen.
pub struct OrdersScreen {
    orders: Vec<Order>,
    state: OrdersState,
}

impl OrdersScreen {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            state: OrdersState::default(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn state(&self) -> &OrdersState {
        &self.state
    }

    pub fn dispatch(&mut self, action: OrdersAction) {
        tracing::debug!(action = action.action_type(), "orders action");
        self.state.apply(action);
    }

    pub fn view(&self) -> OrderView<'_> {
        OrderView::compute(&self.orders, &self.state)
    }
}
