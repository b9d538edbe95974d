//! Sample orders loaded into a fresh store.

use crate::model::{OrderCreate, OrderStatus};
use chrono::{DateTime, TimeZone, Utc};

/// (student, type, details, status, seconds after 2024-07-30 21:00:00 UTC)
const SAMPLES: [(&str, &str, &str, OrderStatus, i64); 8] = [
    (
        "Rafael Pinto",
        "Sobremesa",
        "Chocolate cake slice with vanilla ice cream",
        OrderStatus::Ready,
        34,
    ),
    (
        "Fernanda Rezende",
        "Sobremesa",
        "Tiramisu with coffee and mascarpone",
        OrderStatus::Preparing,
        39,
    ),
    ("Larissa Silva", "Lanche", "Club sandwich with fries and pickle", OrderStatus::Received, 44),
    (
        "Felipe Antunes",
        "Lanche/Sobremesa",
        "Burger combo with brownie dessert",
        OrderStatus::Preparing,
        49,
    ),
    ("Larissa Borges", "Lanche", "Caesar salad with grilled chicken", OrderStatus::Received, 55),
    ("João Silva", "Sobremesa", "Strawberry cheesecake", OrderStatus::Ready, 62),
    ("Maria Santos", "Lanche", "Grilled chicken wrap", OrderStatus::Preparing, 68),
    ("Pedro Lima", "Lanche", "Beef burger with onion rings", OrderStatus::Received, 75),
];

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 30, 21, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The eight demo orders, oldest first, each with a fixed timestamp.
pub fn sample_orders() -> Vec<OrderCreate> {
    let base = base_time();
    SAMPLES
        .iter()
        .map(|&(name, order_type, details, status, offset)| {
            OrderCreate::new(name, order_type, details)
                .with_status(status)
                .at(base + chrono::Duration::seconds(offset))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_strictly_ordered() {
        let samples = sample_orders();
        assert_eq!(samples.len(), 8);
        assert!(samples
            .windows(2)
            .all(|w| w[0].created_at < w[1].created_at));
        assert_eq!(samples[0].student_name, "Rafael Pinto");
        assert_eq!(
            samples[2].created_at.map(|t| t.to_rfc3339()),
            Some("2024-07-30T21:00:44+00:00".to_string())
        );
    }
}
