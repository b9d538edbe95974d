use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Preparation stage of an order.
///
/// Serialised lowercase (`"received"`, `"preparing"`, `"ready"`). Any other label is
/// rejected when parsing, so a stored order always carries one of the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Received,
    Preparing,
    Ready,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status label outside the known set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown order status: {0:?} (expected received, preparing or ready)")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels_only() {
        assert_eq!("preparing".parse::<OrderStatus>(), Ok(OrderStatus::Preparing));
        assert_eq!("ready".parse::<OrderStatus>(), Ok(OrderStatus::Ready));
        assert!("Ready".parse::<OrderStatus>().is_err());
        assert!("served".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn defaults_to_received() {
        assert_eq!(OrderStatus::default(), OrderStatus::Received);
        assert_eq!(
            serde_json::to_string(&OrderStatus::default()).unwrap(),
            "\"received\""
        );
    }
}
