//! Injectable source of "now".
//!
//! The ledger never reads wall-clock time on its own. Anything that needs
//! today's date takes a [`Clock`], so tests and concurrent requests can pin a
//! single instant.

use chrono::{DateTime, FixedOffset, Utc};

/// Supplies the current instant in the institution's local offset.
pub trait Clock: Send + Sync {
    /// The current instant, expressed in institutional local time.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system wall clock viewed from a fixed institutional offset.
///
/// # Example
///
/// ```
/// use chrono::FixedOffset;
/// use leave_ledger::clock::{Clock, SystemClock};
///
/// let clock = SystemClock::new(FixedOffset::east_opt(19800).unwrap());
/// assert_eq!(clock.now().offset().local_minus_utc(), 19800);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Creates a wall clock reporting time in `offset`.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// The institutional offset this clock reports in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
