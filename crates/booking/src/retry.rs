//! Submit-until-confirmed loop
//!
//! Each iteration reads a fresh snapshot of the remote order list
//! before deciding whether to submit. A matching order ends the loop;
//! an unreadable order list aborts it, since submitting blind could
//! create duplicate orders.

use courtside_core::{OrderQuery, OrderRecord, SceneDescriptor, VenueGroupId};
use courtside_ports::{BookingGateway, GatewayError};
use log::{debug, error, info, warn};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

use crate::shutdown::{Shutdown, cancelled, is_cancelled};

/// Pacing and limits for the retry loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Pause after each submission attempt
    pub interval: Duration,
    /// `None` retries until an order appears or the operator cancels
    pub max_attempts: Option<u32>,
    /// Page size for the order list read
    pub page_size: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            interval: Duration::from_secs(5),
            max_attempts: None,
            page_size: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Polling,
    Submitting,
    Found,
    Aborted,
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoopState::Polling => "polling",
            LoopState::Submitting => "submitting",
            LoopState::Found => "found",
            LoopState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AbortReason {
    #[error("Order list unavailable: {0}")]
    OrderListUnavailable(#[source] GatewayError),

    #[error("Cancelled by operator")]
    Cancelled,

    #[error("Gave up after the maximum number of submission attempts")]
    AttemptsExhausted,
}

/// Terminal result of a retry loop run
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// A matching order exists on the remote side
    Found { order: OrderRecord, attempts: u32 },
    Aborted { reason: AbortReason, attempts: u32 },
}

impl BookingOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, BookingOutcome::Found { .. })
    }

    /// Submission attempts made before the loop stopped
    pub fn attempts(&self) -> u32 {
        match self {
            BookingOutcome::Found { attempts, .. } | BookingOutcome::Aborted { attempts, .. } => {
                *attempts
            }
        }
    }
}

/// What the loop submits and how it recognises success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTarget {
    pub group: VenueGroupId,
    pub scene: SceneDescriptor,
    /// Amount quoted by the feasibility check
    pub total_amount: i64,
}

impl BookingTarget {
    pub fn new(group: VenueGroupId, scene: SceneDescriptor, total_amount: i64) -> Self {
        BookingTarget {
            group,
            scene,
            total_amount,
        }
    }

    /// An order in the target venue group proves the booking went through
    pub fn matches(&self, order: &OrderRecord) -> bool {
        order.venue_group == self.group
    }
}

/// Drives submissions until the order list shows a matching order
///
/// ```text
///          Polling ──match──► Found
///             │ ▲
///    no match │ │ interval elapsed
///             ▼ │
///          Submitting
///
/// Polling ──list error / cancelled / limit──► Aborted
/// Submitting ──cancelled──► Aborted
/// ```
///
/// A new loop starts in `Polling`.
pub struct BookingRetryLoop<G: BookingGateway + ?Sized> {
    gateway: Arc<G>,
    target: BookingTarget,
    config: RetryConfig,
    state: LoopState,
    attempts: u32,
}

impl<G: BookingGateway + ?Sized> BookingRetryLoop<G> {
    pub fn new(gateway: Arc<G>, target: BookingTarget, config: RetryConfig) -> Self {
        BookingRetryLoop {
            gateway,
            target,
            config,
            state: LoopState::Polling,
            attempts: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn target(&self) -> &BookingTarget {
        &self.target
    }

    /// Run until a terminal state is reached
    ///
    /// Every gateway call and every pause is raced against cancellation,
    /// so a cancel is observed as soon as it is sent. No submission is
    /// started once cancellation has been requested; one already in
    /// flight is dropped and may or may not reach the service.
    pub async fn run(&mut self, shutdown: &mut Shutdown) -> BookingOutcome {
        info!(
            "Starting booking loop for group {} ({} attempts max)",
            self.target.group,
            self.config
                .max_attempts
                .map_or_else(|| "unlimited".to_string(), |n| n.to_string())
        );

        loop {
            if is_cancelled(shutdown) {
                return self.abort(AbortReason::Cancelled);
            }

            self.transition(LoopState::Polling);
            let query = OrderQuery::pending_appointments(self.config.page_size);
            let gateway = Arc::clone(&self.gateway);
            let fetched = tokio::select! {
                _ = cancelled(shutdown) => None,
                result = gateway.fetch_orders(&query) => Some(result),
            };
            let orders = match fetched {
                None => return self.abort(AbortReason::Cancelled),
                Some(Ok(orders)) => orders,
                Some(Err(e)) => {
                    error!("Failed to read order list: {}", e);
                    return self.abort(AbortReason::OrderListUnavailable(e));
                }
            };

            if let Some(order) = orders.into_iter().find(|order| self.target.matches(order)) {
                self.transition(LoopState::Found);
                info!(
                    "Order {} found for {} after {} attempt(s)",
                    order.order_no, order.venue_name, self.attempts
                );
                return BookingOutcome::Found {
                    order,
                    attempts: self.attempts,
                };
            }

            if self
                .config
                .max_attempts
                .is_some_and(|max| self.attempts >= max)
            {
                return self.abort(AbortReason::AttemptsExhausted);
            }

            // The read may have completed in the same poll as a cancel
            if is_cancelled(shutdown) {
                return self.abort(AbortReason::Cancelled);
            }

            self.transition(LoopState::Submitting);
            self.attempts += 1;
            let submitted = tokio::select! {
                _ = cancelled(shutdown) => None,
                result = gateway.submit_order(
                    self.target.group,
                    self.target.total_amount,
                    &self.target.scene,
                ) => Some(result),
            };
            match submitted {
                None => return self.abort(AbortReason::Cancelled),
                Some(Ok(ack)) => info!("Attempt {} submitted: {}", self.attempts, ack.message),
                Some(Err(e)) => warn!("Attempt {} failed: {}", self.attempts, e),
            }

            tokio::select! {
                _ = cancelled(shutdown) => return self.abort(AbortReason::Cancelled),
                _ = sleep(self.config.interval) => {}
            }
        }
    }

    fn transition(&mut self, next: LoopState) {
        debug!("Booking loop {} -> {}", self.state, next);
        self.state = next;
    }

    fn abort(&mut self, reason: AbortReason) -> BookingOutcome {
        self.transition(LoopState::Aborted);
        warn!("Booking loop aborted after {} attempt(s): {}", self.attempts, reason);
        BookingOutcome::Aborted {
            reason,
            attempts: self.attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::{OrderStatus, parse_day};

    fn order(group: u32) -> OrderRecord {
        OrderRecord {
            id: 1,
            order_no: "NO1".to_string(),
            order_type: "makeappointment".to_string(),
            venue_group: VenueGroupId::new(group),
            venue_id: 7,
            venue_name: "Court 1".to_string(),
            amount: 3000,
            status: OrderStatus::Created,
        }
    }

    #[test]
    fn test_default_config() {
        let config = RetryConfig::default();
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_target_matches_venue_group() {
        let scene = SceneDescriptor::single(parse_day("2024-05-01").unwrap(), "A1".into(), 3);
        let target = BookingTarget::new(VenueGroupId::new(51), scene, 3000);

        assert!(target.matches(&order(51)));
        assert!(!target.matches(&order(25)));
    }

    #[test]
    fn test_outcome_accessors() {
        let found = BookingOutcome::Found {
            order: order(51),
            attempts: 2,
        };
        assert!(found.is_found());
        assert_eq!(found.attempts(), 2);

        let aborted = BookingOutcome::Aborted {
            reason: AbortReason::Cancelled,
            attempts: 0,
        };
        assert!(!aborted.is_found());
        assert_eq!(aborted.attempts(), 0);
    }

    #[test]
    fn test_abort_reason_display() {
        let reason = AbortReason::OrderListUnavailable(GatewayError::Transport("timeout".into()));
        assert!(reason.to_string().contains("timeout"));
        assert_eq!(LoopState::Submitting.to_string(), "submitting");
    }
}
