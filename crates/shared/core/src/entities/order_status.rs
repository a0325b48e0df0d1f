use std::fmt;

/// Remote order lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order exists and awaits payment
    Created,
    /// Order has been paid
    Paid,
    /// Order was cancelled or expired unpaid
    Cancelled,
    /// Any status this client does not know about
    Other(String),
}

impl OrderStatus {
    pub fn from_wire(status: &str) -> Self {
        match status {
            "created" => OrderStatus::Created,
            "paid" => OrderStatus::Paid,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(s) => s,
        }
    }

    /// Returns true if the order is waiting for payment
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Created)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire() {
        assert_eq!(OrderStatus::from_wire("created"), OrderStatus::Created);
        assert_eq!(OrderStatus::from_wire("canceled"), OrderStatus::Cancelled);
        assert_eq!(
            OrderStatus::from_wire("refunding"),
            OrderStatus::Other("refunding".to_string())
        );
        assert!(OrderStatus::Created.is_pending());
        assert!(!OrderStatus::Paid.is_pending());
    }
}
