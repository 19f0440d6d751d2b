//! Headless run without a window
//!
//! Runs the clarity simulation to completion and writes each step's status
//! as plain text, for terminals and scripted checks.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::time::Duration;

use crate::config::SimConfig;
use crate::materials::format_table;
use crate::simulation::{ClaritySimulation, StepReport};

/// Result of a completed headless run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessSummary {
    pub steps: u32,
    pub final_clarity: f64,
}

/// Run the simulation to completion, writing progress to `out`.
///
/// With `realtime` set, each step waits one tick interval, matching the
/// pace of the windowed app.
pub fn run_headless<W: Write>(
    config: &SimConfig,
    realtime: bool,
    out: &mut W,
) -> Result<HeadlessSummary> {
    let settings = &config.simulation;
    let mut sim = ClaritySimulation::new(settings.temperature_c, settings.rate_scale);
    if sim.max_ticks().is_none() {
        bail!(
            "Simulation at {:.1}°C makes no progress",
            settings.temperature_c
        );
    }
    let interval = Duration::from_secs_f64(settings.tick_interval_secs.max(0.0));

    writeln!(out, "Filtration Materials Data:\n{}", format_table())
        .context("Failed to write materials table")?;

    sim.start();
    writeln!(out, "{}", sim.status_text())?;

    let mut last: Option<StepReport> = None;
    while let Some(report) = sim.step() {
        if realtime {
            std::thread::sleep(interval);
        }
        writeln!(out, "{}\n{}\n", sim.clarity_label(), sim.status_text())?;
        last = Some(report);
    }

    let last = last.context("Simulation produced no steps")?;
    log::info!(
        "Headless run finished: {} steps, clarity {:.2}",
        last.step,
        last.clarity
    );
    Ok(HeadlessSummary {
        steps: last.step,
        final_clarity: last.clarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_default_run() {
        let mut out = Vec::new();
        let summary = run_headless(&SimConfig::default(), false, &mut out).unwrap();
        assert_eq!(summary.steps, 28);
        assert_eq!(summary.final_clarity, 1.0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Filtration Materials Data:\nMaterial"));
        assert!(text.contains("Simulating water purification..."));
        assert!(text.contains("Clarity: 0.04 (Filtering)"));
        assert!(text.contains("Step: 28"));
        assert!(text.contains("Clarity: 1.00 (Clear!)"));
        assert!(text
            .trim_end()
            .ends_with("Water is now clear! Simulation complete."));
    }

    #[test]
    fn test_headless_hot_still_is_faster() {
        let mut config = SimConfig::default();
        config.simulation.temperature_c = 100.0;
        let mut out = Vec::new();
        let summary = run_headless(&config, false, &mut out).unwrap();
        assert_eq!(summary.steps, 17);
    }
}
