//! Bounded water clarity value

use std::fmt;

/// Values this close to 1.0 count as clear, absorbing float drift from
/// repeated additions
const CLEAR_EPSILON: f64 = 1e-9;

/// Water clarity in `[0.0, 1.0]`; 0 is dirty, 1 is clear
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Clarity(f64);

impl Clarity {
    pub const DIRTY: Clarity = Clarity(0.0);
    pub const CLEAR: Clarity = Clarity(1.0);

    /// Create a clarity value, clamped into range. NaN maps to dirty.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::DIRTY;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Add `step` and clamp at 1.0. Negative steps are ignored so the
    /// value never decreases.
    pub fn advance(&mut self, step: f64) {
        if step > 0.0 {
            let next = self.0 + step;
            self.0 = if next >= 1.0 - CLEAR_EPSILON { 1.0 } else { next };
        }
    }

    pub fn is_clear(self) -> bool {
        self.0 >= 1.0
    }
}

impl fmt::Display for Clarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Label category for a clarity reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClarityLevel {
    /// No filtering step has run yet
    Dirty,
    Filtering,
    Clear,
}

impl ClarityLevel {
    pub fn classify(clarity: Clarity, steps: u32) -> Self {
        if clarity.is_clear() {
            ClarityLevel::Clear
        } else if steps == 0 {
            ClarityLevel::Dirty
        } else {
            ClarityLevel::Filtering
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClarityLevel::Dirty => "Dirty",
            ClarityLevel::Filtering => "Filtering",
            ClarityLevel::Clear => "Clear!",
        }
    }
}
