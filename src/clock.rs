//! Clock
//!
//! Time source for task ids, snapshot timestamps and the footer year.

use chrono::{Datelike, Local, Utc};

pub trait Clock {
    /// Current time as epoch milliseconds
    fn now_millis(&self) -> i64;

    fn current_year(&self) -> i32;
}

/// Wall clock (`Date.now()` in the browser)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[cfg(test)]
pub use fixed::FixedClock;

#[cfg(test)]
mod fixed {
    use super::Clock;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Manually driven clock; clones share the same time
    #[derive(Clone, Debug, Default)]
    pub struct FixedClock {
        millis: Rc<Cell<i64>>,
    }

    impl FixedClock {
        pub fn at(millis: i64) -> Self {
            Self { millis: Rc::new(Cell::new(millis)) }
        }

        pub fn advance(&self, millis: i64) {
            self.millis.set(self.millis.get() + millis);
        }
    }

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.millis.get()
        }

        fn current_year(&self) -> i32 {
            2024
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::at(1_000);
        let handle = clock.clone();
        clock.advance(500);
        assert_eq!(handle.now_millis(), 1_500);
    }

    #[test]
    fn test_system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
        assert!(SystemClock.current_year() >= 2020);
    }
}
