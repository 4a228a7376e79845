//! Dimmer driver: `level = intensity / 16`.

use platform::{DutyCycle, Intensity};

/// Duty cycle for the indicator. Zero intensity is fully off.
pub fn dimmer_level(intensity: Intensity) -> DutyCycle {
    DutyCycle::from_intensity(intensity)
}
