//! Still process rates as a function of temperature
//!
//! Each rate is a linear response around a 25 °C reference, clamped to
//! `[0, 1]`. The weighted sum of the three is the filtering progress made
//! in one step.

use serde::Serialize;

/// Reference temperature the linear responses are centred on (Celsius)
pub const REFERENCE_TEMP_C: f64 = 25.0;

/// Weights of evaporation, condensation and magnetic capture in the progress sum
pub const EVAPORATION_WEIGHT: f64 = 0.4;
pub const CONDENSATION_WEIGHT: f64 = 0.4;
pub const MAGNETIC_WEIGHT: f64 = 0.2;

/// Effectiveness of each purification process, each in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProcessRates {
    pub evaporation: f64,
    pub condensation: f64,
    pub magnetic: f64,
}

impl ProcessRates {
    pub fn at_temperature(temperature_c: f64) -> Self {
        let delta = temperature_c - REFERENCE_TEMP_C;
        Self {
            evaporation: unit(0.1 + delta * 0.02),
            condensation: unit(0.6 + delta * 0.01),
            magnetic: unit(0.5 + delta * 0.015),
        }
    }

    /// Weighted progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.evaporation * EVAPORATION_WEIGHT
            + self.condensation * CONDENSATION_WEIGHT
            + self.magnetic * MAGNETIC_WEIGHT
    }

    /// Clarity gained per step
    pub fn increment(&self, rate_scale: f64) -> f64 {
        self.progress() * rate_scale
    }
}

fn unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
