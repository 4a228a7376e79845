//! Tone driver.
//!
//! ```text
//! frequency = min_hz + intensity * span_hz / OUT_MAX
//! amplitude = intensity * volume / gain_divisor
//! ```
//!
//! Frequency is never zero, so the buzzer period is always defined; silence is
//! expressed through a zero amplitude only.

use platform::config::OUT_MAX;
use platform::{Intensity, ToneCommand};

use crate::balance::VolumeMultiplier;
use crate::config::ValidatedConfig;

/// Frequency curve and amplitude gain for the buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneShaper {
    min_hz: u16,
    span_hz: u16,
    gain_divisor: u16,
}

impl ToneShaper {
    /// Build from a validated configuration.
    pub fn new(config: &ValidatedConfig) -> Self {
        let cfg = config.get();
        Self {
            min_hz: cfg.tone_min_hz,
            span_hz: cfg.tone_span_hz,
            gain_divisor: cfg.tone_gain_divisor,
        }
    }

    /// Linear sweep from `min_hz` (intensity 0) to `min_hz + span_hz`
    /// (full scale).
    pub fn frequency_hz(&self, intensity: Intensity) -> u16 {
        let sweep = u32::from(intensity.get())
            .saturating_mul(u32::from(self.span_hz))
            .checked_div(u32::from(OUT_MAX))
            .unwrap_or(0);
        self.min_hz
            .saturating_add(u16::try_from(sweep).unwrap_or(self.span_hz))
    }

    /// Balance-scaled amplitude on the intensity scale.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // f32 -> u16 `as` saturates
    pub fn amplitude(&self, intensity: Intensity, volume: VolumeMultiplier) -> u16 {
        let divisor = f32::from(self.gain_divisor.max(1));
        let amplitude = f32::from(intensity.get()) * volume.get() / divisor;
        (amplitude as u16).min(OUT_MAX)
    }

    /// Full command for the tone channel.
    pub fn shape(&self, intensity: Intensity, volume: VolumeMultiplier) -> ToneCommand {
        ToneCommand {
            frequency_hz: self.frequency_hz(intensity),
            amplitude: self.amplitude(intensity, volume),
        }
    }
}
