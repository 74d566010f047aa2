use std::fmt;
use std::rc::Rc;

use chrono::{Datelike, Local};

/// Source of the calendar year shown in the footer.
pub trait Clock {
    fn current_year(&self) -> i32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Shareable clock for component props. Two handles are equal only if they
/// point at the same clock.
#[derive(Clone)]
pub struct ClockHandle(Rc<dyn Clock>);

impl ClockHandle {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Rc::new(clock))
    }
}

impl Clock for ClockHandle {
    fn current_year(&self) -> i32 {
        self.0.current_year()
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl PartialEq for ClockHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ClockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClockHandle").finish()
    }
}
