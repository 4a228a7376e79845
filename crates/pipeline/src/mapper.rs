//! Acquisition-to-intensity mapping.
//!
//! ```text
//! raw <  floor            → 0
//! raw >= floor            → (min(raw, ceiling) - floor) * (OUT_MAX - 1)
//!                           / (ceiling - floor) + 1
//! ```
//!
//! Every genuine signal maps into `1..=OUT_MAX`, so `0` unambiguously means
//! "noise". The function is total: the validated configuration guarantees
//! `ceiling > floor`, and samples above the ceiling saturate.

use platform::config::OUT_MAX;
use platform::{Intensity, RawSample};

use crate::config::ValidatedConfig;

/// Noise floor + linear rescale from ADC counts to [`Intensity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityMapper {
    noise_floor: u16,
    sample_ceiling: u16,
}

impl IntensityMapper {
    /// Build the mapper from a validated configuration.
    pub fn new(config: &ValidatedConfig) -> Self {
        let cfg = config.get();
        Self {
            noise_floor: cfg.noise_floor,
            sample_ceiling: cfg.sample_ceiling,
        }
    }

    /// Lowest sample treated as signal.
    pub const fn noise_floor(&self) -> u16 {
        self.noise_floor
    }

    /// Sample at which the output saturates.
    pub const fn sample_ceiling(&self) -> u16 {
        self.sample_ceiling
    }

    /// Map one sample.
    pub fn map(&self, raw: RawSample) -> Intensity {
        let raw = raw.get();
        if raw < self.noise_floor {
            return Intensity::ZERO;
        }
        let clamped = raw.min(self.sample_ceiling);
        let offset = u32::from(clamped.saturating_sub(self.noise_floor));
        let range = u32::from(self.sample_ceiling.saturating_sub(self.noise_floor));
        let scaled = offset
            .saturating_mul(u32::from(OUT_MAX.saturating_sub(1)))
            .checked_div(range)
            .unwrap_or(0)
            .saturating_add(1);
        Intensity::new(u16::try_from(scaled).unwrap_or(OUT_MAX))
    }
}
