use chrono::{Duration, NaiveDateTime};
use courtside_ports::Clock;
use parking_lot::Mutex;

/// Clock that only advances when explicitly moved
///
/// With a step configured, every `now()` call returns the current time
/// and then moves it forward by the step. This lets a polling loop
/// observe time passing one tick per read.
pub struct ManualClock {
    current: Mutex<NaiveDateTime>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Mutex::new(start),
            step: Duration::zero(),
        }
    }

    /// Advance by `step` after each read
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Move time forward without reading it
    pub fn advance(&self, duration: Duration) {
        *self.current.lock() += duration;
    }

    /// Explicitly set the current time
    pub fn set(&self, time: NaiveDateTime) {
        *self.current.lock() = time;
    }

    /// Current time without applying the step
    pub fn peek(&self) -> NaiveDateTime {
        *self.current.lock()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        let mut current = self.current.lock();
        let now = *current;
        *current += self.step;
        now
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
