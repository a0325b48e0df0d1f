use super::OrderStatus;
use crate::values::VenueGroupId;

/// Order type used for court appointments
pub const APPOINTMENT_ORDER_TYPE: &str = "makeappointment";

/// Remote-side order, read from a fresh order list snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: u64,
    /// Human-facing order number
    pub order_no: String,
    pub order_type: String,
    /// Venue group the order books into
    pub venue_group: VenueGroupId,
    pub venue_id: u32,
    pub venue_name: String,
    pub amount: i64,
    pub status: OrderStatus,
}

/// Server-side filter for the order list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub order_type: String,
    pub status: OrderStatus,
    /// Empty matches every order number
    pub order_no: String,
    pub page: u32,
    pub limit: u32,
}

impl OrderQuery {
    /// First page of appointment orders still awaiting payment
    pub fn pending_appointments(limit: u32) -> Self {
        OrderQuery {
            order_type: APPOINTMENT_ORDER_TYPE.to_string(),
            status: OrderStatus::Created,
            order_no: String::new(),
            page: 1,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_appointments_query() {
        let query = OrderQuery::pending_appointments(20);
        assert_eq!(query.order_type, "makeappointment");
        assert_eq!(query.status, OrderStatus::Created);
        assert!(query.order_no.is_empty());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
    }
}
