use chrono::{Local, NaiveDate, NaiveDateTime};

/// Clock abstracts access to the current timestamp so stores remain
/// deterministic in tests.
///
/// Timestamps are local wall-clock values because the ledger records them as
/// plain `YYYY-MM-DD HH:MM:SS` strings with no zone information.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real-time clock backed by the system local time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
