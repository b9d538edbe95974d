//! Per-order display attributes.
//!
//! Every function here is a pure mapping from order data to what the operator screen shows.

use crate::model::OrderStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Colour tokens understood by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Purple,
    Green,
    Indigo,
    Pink,
    Orange,
    Teal,
    Red,
    Emerald,
    Yellow,
    Gray,
}

/// Avatar colours, assigned by position in the visible window.
pub const AVATAR_PALETTE: [BadgeColor; 8] = [
    BadgeColor::Blue,
    BadgeColor::Purple,
    BadgeColor::Green,
    BadgeColor::Indigo,
    BadgeColor::Pink,
    BadgeColor::Orange,
    BadgeColor::Teal,
    BadgeColor::Red,
];

/// Dot colour and caption for an order's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub color: BadgeColor,
    pub text: &'static str,
}

const UNKNOWN_STATUS: StatusBadge = StatusBadge {
    color: BadgeColor::Gray,
    text: "Unknown",
};

/// A category chip such as "Lanche".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBadge {
    pub label: String,
    pub color: BadgeColor,
}

/// Up to two uppercase initials from a name: "Larissa Silva" → "LS", "Madonna" → "M".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Badge for a stored status.
pub fn status_badge(status: OrderStatus) -> StatusBadge {
    status_badge_for(status.as_str())
}

/// Badge for a raw status label.
///
/// Labels outside the known set get the gray "Unknown" badge. Stored orders always carry
/// a known status, so [`status_badge`] never lands there.
pub fn status_badge_for(label: &str) -> StatusBadge {
    match label {
        "ready" => StatusBadge {
            color: BadgeColor::Emerald,
            text: "Ready to serve",
        },
        "preparing" => StatusBadge {
            color: BadgeColor::Yellow,
            text: "Preparing",
        },
        "received" => StatusBadge {
            color: BadgeColor::Red,
            text: "Order received",
        },
        _ => UNKNOWN_STATUS,
    }
}

/// Category labels of an order type: split on `/`, each label trimmed.
pub fn type_labels(order_type: &str) -> Vec<String> {
    order_type
        .split('/')
        .map(|label| label.trim().to_string())
        .collect()
}

/// Palette for an order type; label `i` uses entry `i`, or the first entry past the end.
fn type_palette(order_type: &str) -> &'static [BadgeColor] {
    let dessert = order_type.contains("Sobremesa");
    let snack = order_type.contains("Lanche");
    match (snack, dessert) {
        (true, true) => &[BadgeColor::Blue, BadgeColor::Orange],
        (false, true) => &[BadgeColor::Emerald],
        (true, false) => &[BadgeColor::Blue],
        (false, false) => &[BadgeColor::Gray],
    }
}

pub fn type_badges(order_type: &str) -> Vec<TypeBadge> {
    let palette = type_palette(order_type);
    type_labels(order_type)
        .into_iter()
        .enumerate()
        .map(|(i, label)| TypeBadge {
            label,
            color: palette.get(i).copied().unwrap_or(palette[0]),
        })
        .collect()
}

pub fn avatar_color(index: usize) -> BadgeColor {
    AVATAR_PALETTE[index % AVATAR_PALETTE.len()]
}

/// 1-based ticket number padded to three digits: index 0 → "#001".
pub fn ticket_number(index: usize) -> String {
    format!("#{:03}", index + 1)
}

/// 24-hour wall time of the ordering timestamp, e.g. "21:00:44".
pub fn format_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Larissa Silva"), "LS");
        assert_eq!(initials(""), "");
        assert_eq!(initials("Madonna"), "M");
        assert_eq!(initials("felipe antunes de souza"), "FA");
        assert_eq!(initials("  João   Silva "), "JS");
    }

    #[test]
    fn status_badges_are_a_closed_mapping() {
        assert_eq!(status_badge(OrderStatus::Ready).color, BadgeColor::Emerald);
        assert_eq!(status_badge(OrderStatus::Preparing).text, "Preparing");
        assert_eq!(status_badge(OrderStatus::Received).text, "Order received");
        assert_eq!(status_badge_for("ready"), status_badge(OrderStatus::Ready));
        assert_eq!(status_badge_for("cancelled"), UNKNOWN_STATUS);
        assert_eq!(status_badge_for("").color, BadgeColor::Gray);
    }

    #[test]
    fn stored_statuses_never_show_unknown() {
        for status in OrderStatus::ALL {
            assert_ne!(status_badge(status), UNKNOWN_STATUS);
            assert_eq!(status_badge(status), status_badge_for(status.as_str()));
        }
    }

    #[test]
    fn type_labels_split_and_trim() {
        assert_eq!(type_labels("Lanche / Sobremesa"), vec!["Lanche", "Sobremesa"]);
        assert_eq!(type_labels("Lanche"), vec!["Lanche"]);
    }

    #[test]
    fn type_badges_follow_category_palette() {
        let combo = type_badges("Lanche/Sobremesa");
        assert_eq!(combo[0].color, BadgeColor::Blue);
        assert_eq!(combo[1].color, BadgeColor::Orange);

        assert_eq!(type_badges("Sobremesa")[0].color, BadgeColor::Emerald);
        assert_eq!(type_badges("Bebida")[0].color, BadgeColor::Gray);

        // Extra labels fall back to the first colour.
        let three = type_badges("Lanche/Sobremesa/Bebida");
        assert_eq!(three[2].color, BadgeColor::Blue);
    }

    #[test]
    fn avatar_colors_cycle() {
        assert_eq!(avatar_color(0), BadgeColor::Blue);
        assert_eq!(avatar_color(7), BadgeColor::Red);
        assert_eq!(avatar_color(8), avatar_color(0));
    }

    #[test]
    fn tickets_and_times() {
        assert_eq!(ticket_number(0), "#001");
        assert_eq!(ticket_number(41), "#042");
        let at = Utc.with_ymd_and_hms(2024, 7, 30, 21, 0, 44).unwrap();
        assert_eq!(format_time(at), "21:00:44");
    }
}
