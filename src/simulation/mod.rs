//! Water clarity simulation - the clarity value, process rates and tick timing

mod clarity;
mod process;
mod timer;

pub use clarity::{Clarity, ClarityLevel};
pub use process::{ProcessRates, REFERENCE_TEMP_C};
pub use timer::{TickTimer, TimerEvents};

use serde::Serialize;

/// Lifecycle of a simulation run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SimState {
    /// Waiting for the first start
    Idle,
    Running,
    Paused,
    /// Clarity reached 1.0; no further steps run
    Complete,
}

/// Outcome of one simulation step
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StepReport {
    pub step: u32,
    pub clarity: f64,
    pub rates: ProcessRates,
    pub completed: bool,
}

/// Clarity climbing toward 1.0 at a fixed per-step increment
#[derive(Clone, Debug)]
pub struct ClaritySimulation {
    temperature_c: f64,
    rates: ProcessRates,
    increment: f64,
    clarity: Clarity,
    steps: u32,
    state: SimState,
    last_report: Option<StepReport>,
}

impl ClaritySimulation {
    pub fn new(temperature_c: f64, rate_scale: f64) -> Self {
        let rates = ProcessRates::at_temperature(temperature_c);
        Self {
            temperature_c,
            rates,
            increment: rates.increment(rate_scale),
            clarity: Clarity::DIRTY,
            steps: 0,
            state: SimState::Idle,
            last_report: None,
        }
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn rates(&self) -> ProcessRates {
        self.rates
    }

    /// Clarity gained per step
    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn clarity(&self) -> Clarity {
        self.clarity
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn last_report(&self) -> Option<&StepReport> {
        self.last_report.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    /// Number of steps a full run takes, or `None` if it never completes
    pub fn max_ticks(&self) -> Option<u32> {
        if self.increment <= 0.0 {
            return None;
        }
        Some((1.0 / self.increment).ceil() as u32)
    }

    /// Reset to dirty water and begin running. Also used to restart.
    pub fn start(&mut self) {
        self.clarity = Clarity::DIRTY;
        self.steps = 0;
        self.last_report = None;
        self.state = SimState::Running;
        log::info!(
            "Simulation started at {:.1}°C (increment {:.4}/step)",
            self.temperature_c,
            self.increment
        );
    }

    /// Run one step. Returns `None` unless the simulation is running.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.state != SimState::Running {
            return None;
        }

        self.clarity.advance(self.increment);
        self.steps += 1;

        let completed = self.clarity.is_clear();
        if completed {
            self.state = SimState::Complete;
            log::info!("Water clear after {} steps", self.steps);
        }

        let report = StepReport {
            step: self.steps,
            clarity: self.clarity.value(),
            rates: self.rates,
            completed,
        };
        log::debug!("Step {}: clarity {:.4}", report.step, report.clarity);
        self.last_report = Some(report);
        Some(report)
    }

    /// Switch between running and paused; no effect in other states
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SimState::Running => SimState::Paused,
            SimState::Paused => SimState::Running,
            other => other,
        };
    }

    pub fn level(&self) -> ClarityLevel {
        ClarityLevel::classify(self.clarity, self.steps)
    }

    /// Headline text, e.g. `Clarity: 0.36 (Filtering)`
    pub fn clarity_label(&self) -> String {
        format!("Clarity: {} ({})", self.clarity, self.level().label())
    }

    /// Multi-line progress message for the status area
    pub fn status_text(&self) -> String {
        let Some(report) = &self.last_report else {
            return match self.state {
                SimState::Idle => "Starting simulation...".to_string(),
                _ => "Simulating water purification...".to_string(),
            };
        };

        let mut text = format!(
            "Step: {}\nEvaporation: {:.2}, Condensation: {:.2}, Magnetic: {:.2}",
            report.step,
            report.rates.evaporation,
            report.rates.condensation,
            report.rates.magnetic
        );
        if self.state == SimState::Complete {
            text.push_str("\n\nWater is now clear! Simulation complete.");
        } else if self.state == SimState::Paused {
            text.push_str("\n\nPaused.");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sim() -> ClaritySimulation {
        ClaritySimulation::new(40.0, 0.06)
    }

    #[test]
    fn test_idle_until_started() {
        let mut sim = default_sim();
        assert_eq!(sim.state(), SimState::Idle);
        assert!(sim.step().is_none());
        assert_eq!(sim.clarity(), Clarity::DIRTY);
        assert_eq!(sim.clarity_label(), "Clarity: 0.00 (Dirty)");
        assert_eq!(sim.status_text(), "Starting simulation...");
    }

    #[test]
    fn test_start_message() {
        let mut sim = default_sim();
        sim.start();
        assert!(sim.is_running());
        assert_eq!(sim.status_text(), "Simulating water purification...");
        assert_eq!(sim.clarity_label(), "Clarity: 0.00 (Dirty)");
    }

    #[test]
    fn test_first_step() {
        let mut sim = default_sim();
        sim.start();
        let report = sim.step().unwrap();
        assert_eq!(report.step, 1);
        assert!((report.clarity - 0.0363).abs() < 1e-9);
        assert!(!report.completed);
        assert_eq!(sim.clarity_label(), "Clarity: 0.04 (Filtering)");

        let status = sim.status_text();
        assert!(status.starts_with("Step: 1\n"));
        assert!(status.contains("Evaporation: 0.40"));
        assert!(status.contains("Condensation: 0.75"));
    }

    #[test]
    fn test_completes_in_28_steps_at_default_temperature() {
        let mut sim = default_sim();
        assert_eq!(sim.max_ticks(), Some(28));
        sim.start();

        let mut last = None;
        while let Some(report) = sim.step() {
            last = Some(report);
        }
        let last = last.unwrap();
        assert_eq!(last.step, 28);
        assert!(last.completed);
        assert_eq!(sim.state(), SimState::Complete);
        assert_eq!(sim.clarity_label(), "Clarity: 1.00 (Clear!)");
        assert!(sim
            .status_text()
            .ends_with("Water is now clear! Simulation complete."));
    }

    #[test]
    fn test_no_steps_after_complete() {
        let mut sim = ClaritySimulation::new(100.0, 1.0);
        sim.start();
        assert!(sim.step().unwrap().completed);
        assert!(sim.step().is_none());
        assert_eq!(sim.steps(), 1);
    }

    #[test]
    fn test_pause_blocks_steps() {
        let mut sim = default_sim();
        sim.start();
        sim.step();
        sim.toggle_pause();
        assert_eq!(sim.state(), SimState::Paused);
        assert!(sim.step().is_none());
        assert!(sim.status_text().ends_with("Paused."));

        sim.toggle_pause();
        assert_eq!(sim.step().unwrap().step, 2);
    }

    #[test]
    fn test_toggle_pause_ignored_when_idle_or_complete() {
        let mut sim = default_sim();
        sim.toggle_pause();
        assert_eq!(sim.state(), SimState::Idle);

        let mut sim = ClaritySimulation::new(100.0, 1.0);
        sim.start();
        sim.step();
        sim.toggle_pause();
        assert_eq!(sim.state(), SimState::Complete);
    }

    #[test]
    fn test_restart_resets() {
        let mut sim = default_sim();
        sim.start();
        for _ in 0..5 {
            sim.step();
        }
        sim.start();
        assert_eq!(sim.steps(), 0);
        assert_eq!(sim.clarity(), Clarity::DIRTY);
        assert!(sim.last_report().is_none());
    }

    #[test]
    fn test_no_progress_never_completes() {
        let sim = ClaritySimulation::new(-100.0, 0.06);
        assert_eq!(sim.increment(), 0.0);
        assert_eq!(sim.max_ticks(), None);
    }
}
