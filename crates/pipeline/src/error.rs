//! Startup configuration errors.
//!
//! These are the only errors the pipeline defines. Everything at runtime
//! saturates instead of failing: a real-time control loop cannot stall on a
//! bad sample, so out-of-range samples and balances are clamped or rendered
//! blank rather than propagated.

use thiserror_no_std::Error;

/// A [`PipelineConfig`](crate::config::PipelineConfig) that must not reach the
/// tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The mapper would divide by zero or invert.
    #[error("sample ceiling {ceiling} must be above noise floor {floor}")]
    CeilingNotAboveFloor {
        /// Configured noise floor
        floor: u16,
        /// Configured sample ceiling
        ceiling: u16,
    },
    /// The ceiling can never be reached by the ADC.
    #[error("sample ceiling {ceiling} exceeds ADC range {adc_max}")]
    CeilingAboveAdcMax {
        /// Configured sample ceiling
        ceiling: u16,
        /// Largest ADC count
        adc_max: u16,
    },
    /// The initial balance is off the `a + b = 5` line.
    #[error("initial balance ({a}, {b}) does not sum to 5")]
    InvalidInitialBalance {
        /// Configured `a`
        a: u8,
        /// Configured `b`
        b: u8,
    },
    /// The light-bar ceiling is too small to give every group a span.
    #[error("light bar ceiling {0} leaves an empty brightness group")]
    LightBarCeilingTooSmall(u16),
    /// The tone amplitude divisor is zero.
    #[error("tone gain divisor must be non-zero")]
    ZeroToneGain,
    /// The tone sweep would start at 0 Hz.
    #[error("tone base frequency must be non-zero")]
    ZeroToneFrequency,
    /// The tone sweep does not fit the frequency register.
    #[error("tone sweep {min_hz} + {span_hz} Hz overflows")]
    ToneRangeOverflow {
        /// Base frequency
        min_hz: u16,
        /// Sweep width
        span_hz: u16,
    },
    /// The orchestrator would spin.
    #[error("tick period must be non-zero")]
    ZeroTickPeriod,
}
