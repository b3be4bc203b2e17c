use chrono::{Local, NaiveDate};

/// Calendar capability consumed by the account operations.
///
/// "Today" is always supplied by the caller through this trait, never read
/// from a hidden global, so the daily-limit windows can be pinned in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A pinned calendar. `set` moves it, so a scenario can cross a day
/// boundary between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn set(&mut self, today: NaiveDate) {
        self.today = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
