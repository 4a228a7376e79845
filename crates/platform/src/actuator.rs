//! Actuation channel abstractions: dimmer and tone generator
//!
//! Both channels are plain setters: the pipeline computes the level and the
//! board applies it. Neither keeps any state beyond the hardware register.

use crate::signal_types::DutyCycle;

/// Dimmable indicator (PWM-driven LED).
pub trait DimmerChannel {
    /// Error type
    type Error: core::fmt::Debug;

    /// Apply an 8-bit duty cycle. `DutyCycle::OFF` must turn the output off.
    fn set_level(&mut self, level: DutyCycle) -> Result<(), Self::Error>;
}

/// Audible tone generator (PWM-driven buzzer).
pub trait ToneChannel {
    /// Error type
    type Error: core::fmt::Debug;

    /// Apply a tone. An amplitude of zero must silence the output even though
    /// the frequency is always non-zero.
    fn set_tone(&mut self, tone: ToneCommand) -> Result<(), Self::Error>;
}

/// Frequency + amplitude pair for the tone channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneCommand {
    /// Tone frequency in Hz; never zero once produced by the tone driver
    pub frequency_hz: u16,
    /// Amplitude on the intensity scale (0–`OUT_MAX`)
    pub amplitude: u16,
}

impl ToneCommand {
    /// `true` when the output must be silent.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        self.amplitude == 0
    }

    /// Tone period in microseconds, or `None` for a zero frequency.
    #[must_use]
    pub fn period_us(&self) -> Option<u32> {
        1_000_000_u32.checked_div(u32::from(self.frequency_hz))
    }
}
