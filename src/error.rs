//! Error types

use thiserror::Error;

/// Invalid runtime configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Temperature {value}°C is outside the supported range [{min}, {max}]")]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Rate scale must be in (0, 1], got {0}")]
    InvalidRateScale(f64),

    #[error("Tick interval must be positive, got {0}s")]
    InvalidTickInterval(f64),

    #[error("Start delay must not be negative, got {0}s")]
    InvalidStartDelay(f64),

    #[error("Window size must be non-zero, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("Settings make no clarity progress per step (temperature {temperature_c}°C)")]
    NoProgress { temperature_c: f64 },
}
