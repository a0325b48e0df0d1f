/// Result of a feasibility check: pricing and time limit for a scene,
/// without creating an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feasibility {
    pub venue_name: String,
    pub venue_group_name: String,
    /// Amount the submission must carry
    pub total_amount: i64,
    /// Minutes an unpaid order stays valid
    pub pay_valid_minutes: u32,
}

/// Acknowledgement of a submission
///
/// Never proof that an order exists; only the remote order list is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAck {
    pub message: String,
}
