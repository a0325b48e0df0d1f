//! Interactive booking session
//!
//! `prepare` gathers the operator's choices and validates them against
//! the service; `book` waits for the window and drives the retry loop.

use courtside_booking::{
    AbortReason, AvailabilityMatrix, BookingOutcome, BookingRetryLoop, BookingTarget,
    BookingWindow, GateError, ResolveError, RetryConfig, Shutdown, SlotSelection,
    SubmissionGate, WindowError,
};
use courtside_core::{Feasibility, OrderRecord, VenueGroupId, iso_weekday, parse_day};
use courtside_ports::{BookingGateway, Clock, GatewayError};
use log::info;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::BookingConfigJson;
use crate::console::Console;
use crate::render::{render_feasibility, render_found, render_price_table};

const GROUP_PROMPT: &str = "Venue group id (known groups: 25, 51, 54): ";
const DATE_PROMPT: &str = "Booking date (YYYY-MM-DD): ";
const VENUE_PROMPT: &str = "Venue name: ";
const HOUR_PROMPT: &str = "Start hour (e.g. 9 for the 09:00 slot): ";

/// Remote call a session step depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FetchVenues,
    FetchTimeSlots,
    FetchBookedMap,
    FetchPriceTable,
    CheckFeasibility,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Step::FetchVenues => "fetch venues",
            Step::FetchTimeSlots => "fetch time slots",
            Step::FetchBookedMap => "fetch booked map",
            Step::FetchPriceTable => "fetch price table",
            Step::CheckFeasibility => "check feasibility",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),

    #[error("Invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Failed to {step}: {source}")]
    Gateway { step: Step, source: GatewayError },

    #[error("Failed to resolve selection: {0}")]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("Booking aborted after {attempts} attempt(s): {reason}")]
    Aborted { reason: AbortReason, attempts: u32 },
}

impl SessionError {
    /// Whether the operator asked to stop
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            SessionError::Gate(GateError::Cancelled)
                | SessionError::Aborted {
                    reason: AbortReason::Cancelled,
                    ..
                }
        )
    }
}

fn at_step(step: Step) -> impl FnOnce(GatewayError) -> SessionError {
    move |source| SessionError::Gateway { step, source }
}

/// Timing and limits for a session
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub window: BookingWindow,
    pub gate_tick: Duration,
    pub retry: RetryConfig,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            window: BookingWindow::default(),
            gate_tick: Duration::from_secs(1),
            retry: RetryConfig::default(),
        }
    }
}

impl SessionSettings {
    pub fn from_config(config: &BookingConfigJson) -> Result<Self, WindowError> {
        Ok(SessionSettings {
            window: config.window()?,
            gate_tick: config.gate_tick(),
            retry: config.retry(),
        })
    }
}

/// Everything the booking phase needs, validated by the service
#[derive(Debug, Clone)]
pub struct BookingPlan {
    pub target: BookingTarget,
    pub selection: SlotSelection,
    pub feasibility: Feasibility,
    pub matrix: AvailabilityMatrix,
}

pub struct BookingSession<G: BookingGateway + ?Sized, C: Clock> {
    gateway: Arc<G>,
    gate: SubmissionGate<C>,
    retry: RetryConfig,
}

impl<G: BookingGateway + ?Sized, C: Clock> BookingSession<G, C> {
    pub fn new(gateway: Arc<G>, clock: C, settings: SessionSettings) -> Self {
        BookingSession {
            gateway,
            gate: SubmissionGate::new(settings.window, clock).with_tick(settings.gate_tick),
            retry: settings.retry,
        }
    }

    /// Prompt, fetch and validate up to a feasible booking plan
    pub async fn prepare<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<BookingPlan, SessionError> {
        let input = console.ask(GROUP_PROMPT)?;
        let group: VenueGroupId = input.parse().map_err(|_| SessionError::InvalidInput {
            field: "venue group id",
            value: input.clone(),
        })?;

        let venues = self
            .gateway
            .fetch_venues(group)
            .await
            .map_err(at_step(Step::FetchVenues))?;
        let slots = self
            .gateway
            .fetch_time_slots(group)
            .await
            .map_err(at_step(Step::FetchTimeSlots))?;
        info!(
            "Venue group {}: {} venues, {} time slots",
            group,
            venues.len(),
            slots.len()
        );

        let input = console.ask(DATE_PROMPT)?;
        let day = parse_day(&input).map_err(|_| SessionError::InvalidInput {
            field: "booking date",
            value: input.clone(),
        })?;
        let booked = self
            .gateway
            .fetch_booked_map(group, day)
            .await
            .map_err(at_step(Step::FetchBookedMap))?;

        let matrix = AvailabilityMatrix::build(&venues, &slots, &booked);
        console.say(&format!("\nAvailability on {}:", day))?;
        console.say(matrix.render().trim_end_matches('\n'))?;

        let weekday = iso_weekday(day);
        let prices = self
            .gateway
            .fetch_price_table(group, weekday, day)
            .await
            .map_err(at_step(Step::FetchPriceTable))?;
        console.say(render_price_table(&prices, weekday).trim_end_matches('\n'))?;

        let venue_name = console.ask(VENUE_PROMPT)?;
        let input = console.ask(HOUR_PROMPT)?;
        let hour: u32 = input.parse().map_err(|_| SessionError::InvalidInput {
            field: "hour",
            value: input.clone(),
        })?;
        let selection = SlotSelection::resolve(&venues, &slots, &venue_name, hour)?;
        let scene = selection.scene(day);

        let feasibility = self
            .gateway
            .check_feasibility(group, &scene)
            .await
            .map_err(at_step(Step::CheckFeasibility))?;
        console.say(&render_feasibility(&feasibility))?;
        info!(
            "Selected {} slot {} on {} for {}",
            selection.venue_key, selection.slot_id, day, feasibility.total_amount
        );

        Ok(BookingPlan {
            target: BookingTarget::new(group, scene, feasibility.total_amount),
            selection,
            feasibility,
            matrix,
        })
    }

    /// Wait for the window, then submit until an order shows up
    pub async fn book<R: BufRead, W: Write>(
        &self,
        plan: BookingPlan,
        console: &mut Console<R, W>,
        shutdown: &mut Shutdown,
    ) -> Result<OrderRecord, SessionError> {
        console.say(&format!(
            "\nWaiting for the booking window ({})...",
            self.gate.window()
        ))?;

        let mut waited = false;
        self.gate
            .await_window(shutdown, |tick| {
                waited = true;
                let _ = console.overwrite(&tick.to_string());
            })
            .await?;
        if waited {
            console.say("")?;
        }

        let mut retry = BookingRetryLoop::new(self.gateway.clone(), plan.target, self.retry.clone());
        match retry.run(shutdown).await {
            BookingOutcome::Found { order, .. } => {
                console.say(&render_found(&order))?;
                Ok(order)
            }
            BookingOutcome::Aborted { reason, attempts } => {
                Err(SessionError::Aborted { reason, attempts })
            }
        }
    }
}
