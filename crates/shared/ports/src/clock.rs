use chrono::NaiveDateTime;

/// Port for time abstraction
///
/// The booking window is defined in local wall-clock time, so clocks
/// report naive local date-times:
/// - Real system time for production
/// - Manually driven time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current local date and time according to this clock
    fn now(&self) -> NaiveDateTime;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
