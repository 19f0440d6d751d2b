//! Runtime configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `solar_still.ron` in the working directory, or an explicit file path
//! 3. Environment variables prefixed with `SOLAR_STILL_`
//!
//! Example environment variable: `SOLAR_STILL_SIMULATION__TEMPERATURE_C=55`

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::simulation::ProcessRates;

/// Supported still temperature range (Celsius)
pub const MIN_TEMPERATURE_C: f64 = 0.0;
pub const MAX_TEMPERATURE_C: f64 = 100.0;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Still temperature in Celsius
    pub temperature_c: f64,
    /// Multiplier from process progress to clarity gained per step
    pub rate_scale: f64,
    /// Seconds between steps
    pub tick_interval_secs: f64,
    /// Seconds before the first run starts
    pub start_delay_secs: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            temperature_c: 40.0,
            rate_scale: 0.06,
            tick_interval_secs: 1.0,
            start_delay_secs: 1.0,
        }
    }
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 520,
            title: "Solar Distillation Simulator".to_string(),
        }
    }
}

impl SimConfig {
    /// Load configuration with layered priority. When `path` is given the
    /// file must exist; otherwise `solar_still.ron` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("solar_still")
                .format(FileFormat::Ron)
                .required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("SOLAR_STILL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;

        if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&sim.temperature_c) {
            return Err(ConfigError::TemperatureOutOfRange {
                value: sim.temperature_c,
                min: MIN_TEMPERATURE_C,
                max: MAX_TEMPERATURE_C,
            });
        }
        if !(sim.rate_scale > 0.0 && sim.rate_scale <= 1.0) {
            return Err(ConfigError::InvalidRateScale(sim.rate_scale));
        }
        if !(sim.tick_interval_secs > 0.0 && sim.tick_interval_secs.is_finite()) {
            return Err(ConfigError::InvalidTickInterval(sim.tick_interval_secs));
        }
        if !(sim.start_delay_secs >= 0.0 && sim.start_delay_secs.is_finite()) {
            return Err(ConfigError::InvalidStartDelay(sim.start_delay_secs));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if ProcessRates::at_temperature(sim.temperature_c).increment(sim.rate_scale) <= 0.0 {
            return Err(ConfigError::NoProgress {
                temperature_c: sim.temperature_c,
            });
        }
        Ok(())
    }

    /// Serialize to pretty RON, the same format [`SimConfig::load`] reads
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration to RON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.simulation.temperature_c, 40.0);
        assert_eq!(config.simulation.rate_scale, 0.06);
        assert_eq!(config.simulation.tick_interval_secs, 1.0);
        assert_eq!(config.window.width, 640);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = SimConfig::load(None).expect("Failed to load config");
        assert_eq!(config.simulation.rate_scale, 0.06);
        assert_eq!(config.window.title, "Solar Distillation Simulator");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = SimConfig::load(Some(Path::new("does/not/exist.ron")));
        assert!(result.is_err());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = SimConfig::default();
        config.simulation.temperature_c = 120.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TemperatureOutOfRange {
                value: 120.0,
                min: 0.0,
                max: 100.0
            })
        );

        config.simulation.temperature_c = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rates_and_timing() {
        let mut config = SimConfig::default();
        config.simulation.rate_scale = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRateScale(0.0)));

        let mut config = SimConfig::default();
        config.simulation.tick_interval_secs = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTickInterval(-1.0))
        );

        let mut config = SimConfig::default();
        config.simulation.start_delay_secs = -0.5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidStartDelay(-0.5)));

        let mut config = SimConfig::default();
        config.simulation.start_delay_secs = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_window_size() {
        let mut config = SimConfig::default();
        config.window.height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindowSize { .. })
        ));
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut config = SimConfig::default();
        config.simulation.temperature_c = 65.0;
        let ron = config.to_ron().unwrap();
        assert!(ron.contains("temperature_c"));

        let parsed: SimConfig = ron::from_str(&ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let parsed: SimConfig = ron::from_str("(simulation: (temperature_c: 70.0))").unwrap();
        assert_eq!(parsed.simulation.temperature_c, 70.0);
        assert_eq!(parsed.simulation.rate_scale, 0.06);
        assert_eq!(parsed.window, WindowConfig::default());
    }
}
