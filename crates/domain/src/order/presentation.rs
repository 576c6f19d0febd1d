//! Status-to-presentation lookup table.
//!
//! The rendering layer consults [`OrderStatus::presentation`] instead of
//! switching on status strings; the match below is exhaustive, so adding a
//! status without a presentation entry is a compile error.

use serde::Serialize;

use super::OrderStatus;

/// Symbolic icon key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    Clock,
    CheckCircle,
    Truck,
    Package,
}

/// Badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
}

/// Semantic text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Warning,
    Primary,
    Success,
}

/// Action buttons an order card may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    ViewDetails,
    Cancel,
    TrackShipment,
}

impl OrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::ViewDetails => "View Details",
            OrderAction::Cancel => "Cancel Order",
            OrderAction::TrackShipment => "Track Shipment",
        }
    }
}

/// How a status is rendered and which actions it allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub icon: StatusIcon,
    pub badge: BadgeVariant,
    pub color: StatusColor,
    pub actions: &'static [OrderAction],
}

impl StatusPresentation {
    /// Returns true if `action` is offered for this status.
    pub fn allows(&self, action: OrderAction) -> bool {
        self.actions.contains(&action)
    }
}

impl OrderStatus {
    /// Returns the presentation entry for this status.
    pub fn presentation(&self) -> StatusPresentation {
        match self {
            OrderStatus::Pending => StatusPresentation {
                icon: StatusIcon::Clock,
                badge: BadgeVariant::Secondary,
                color: StatusColor::Warning,
                actions: &[OrderAction::ViewDetails, OrderAction::Cancel],
            },
            OrderStatus::Confirmed => StatusPresentation {
                icon: StatusIcon::CheckCircle,
                badge: BadgeVariant::Default,
                color: StatusColor::Primary,
                actions: &[OrderAction::ViewDetails],
            },
            OrderStatus::Shipped => StatusPresentation {
                icon: StatusIcon::Truck,
                badge: BadgeVariant::Default,
                color: StatusColor::Primary,
                actions: &[OrderAction::ViewDetails, OrderAction::TrackShipment],
            },
            OrderStatus::Delivered => StatusPresentation {
                icon: StatusIcon::Package,
                badge: BadgeVariant::Default,
                color: StatusColor::Success,
                actions: &[OrderAction::ViewDetails],
            },
        }
    }
}
