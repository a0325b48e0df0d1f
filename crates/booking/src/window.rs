//! Daily booking window and the gate that waits for it

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use courtside_ports::Clock;
use log::{debug, info};
use std::fmt;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{GateError, WindowError};
use crate::shutdown::{Shutdown, cancelled, is_cancelled};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Local time-of-day range, inclusive at both ends, during which the
/// remote service accepts submissions
///
/// Compared at one-second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: NaiveTime,
    end: NaiveTime,
}

const DEFAULT_START: NaiveTime = time_of_day(7, 0, 0);
const DEFAULT_END: NaiveTime = time_of_day(23, 30, 0);

// Evaluated at compile time only
const fn time_of_day(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(time) => time,
        None => panic!("invalid time of day"),
    }
}

impl Default for BookingWindow {
    fn default() -> Self {
        BookingWindow {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl BookingWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, WindowError> {
        let (start, end) = (truncate(start), truncate(end));
        if start >= end {
            return Err(WindowError::Inverted { start, end });
        }
        Ok(BookingWindow { start, end })
    }

    /// Parse "HH:MM:SS" bounds
    pub fn parse(start: &str, end: &str) -> Result<Self, WindowError> {
        Self::new(parse_time(start)?, parse_time(end)?)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        let time = truncate(time);
        time >= self.start && time <= self.end
    }

    /// When the window next opens, or `None` if it is open at `now`
    ///
    /// After the end of today's window the next opening is tomorrow;
    /// before the start it is today.
    pub fn next_opening(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let time = truncate(now.time());
        if self.contains(time) {
            return None;
        }

        let today = now.date();
        let day = if time > self.end {
            today.succ_opt().unwrap_or(today)
        } else {
            today
        };
        Some(day.and_time(self.start))
    }

    /// Time left until the window opens, rounded to the second
    pub fn wait_until_open(&self, now: NaiveDateTime) -> Option<Duration> {
        self.next_opening(now)
            .map(|opening| round_to_second(opening - now))
    }
}

impl fmt::Display for BookingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

fn parse_time(input: &str) -> Result<NaiveTime, WindowError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| WindowError::InvalidTime(input.to_string()))
}

fn truncate(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

fn round_to_second(delta: chrono::TimeDelta) -> Duration {
    let millis = delta.num_milliseconds().max(0) as u64;
    Duration::from_secs((millis + 500) / 1000)
}

/// Compact remaining-time text: "7h5m0s", "12m3s", "9s"
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// One countdown update emitted while the window is closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTick {
    pub now: NaiveDateTime,
    pub opens_at: NaiveDateTime,
    pub remaining: Duration,
}

impl fmt::Display for WindowTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current time: {}, waiting: {}",
            self.now.format(TIME_FORMAT),
            format_remaining(self.remaining)
        )
    }
}

/// Holds the caller back until the booking window is open
///
/// Polls the clock once per tick and recomputes the next opening from
/// the current date each time, so a wait spanning midnight lands on
/// the right day. Cancellation is observed within one tick.
pub struct SubmissionGate<C: Clock> {
    window: BookingWindow,
    clock: C,
    tick: Duration,
}

impl<C: Clock> SubmissionGate<C> {
    pub fn new(window: BookingWindow, clock: C) -> Self {
        SubmissionGate {
            window,
            clock,
            tick: Duration::from_secs(1),
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn window(&self) -> &BookingWindow {
        &self.window
    }

    /// Whether submissions are allowed right now
    pub fn is_open(&self) -> bool {
        self.window.contains(self.clock.now().time())
    }

    /// Wait until the window is open, calling `on_tick` once per tick
    /// spent outside it. Returns immediately if already open.
    pub async fn await_window<F>(&self, shutdown: &mut Shutdown, mut on_tick: F) -> Result<(), GateError>
    where
        F: FnMut(&WindowTick),
    {
        loop {
            if is_cancelled(shutdown) {
                info!("Cancelled while waiting for booking window {}", self.window);
                return Err(GateError::Cancelled);
            }

            let now = self.clock.now();
            let Some(opens_at) = self.window.next_opening(now) else {
                info!(
                    "Booking window {} open at {}",
                    self.window,
                    now.format(TIME_FORMAT)
                );
                return Ok(());
            };

            let tick = WindowTick {
                now,
                opens_at,
                remaining: round_to_second(opens_at - now),
            };
            debug!("Window closed, opens at {} ({})", opens_at, format_remaining(tick.remaining));
            on_tick(&tick);

            tokio::select! {
                _ = cancelled(shutdown) => {
                    info!("Cancelled while waiting for booking window {}", self.window);
                    return Err(GateError::Cancelled);
                }
                _ = sleep(self.tick) => {}
            }
        }
    }
}
