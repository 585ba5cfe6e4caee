//! Time source used for key creation and expiry checks.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Injected into the services so that expiry can be tested without waiting
/// seven days.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
