//! Signal domain newtypes for compile-time safety.
//!
//! These zero-cost abstractions keep raw ADC counts, normalised intensity and
//! LED brightness from being mixed up:
//! - `RawSample`: clamps to the 12-bit ADC range (0–`ADC_MAX`)
//! - `Intensity`: clamps to the normalised output range (0–`OUT_MAX`)
//! - `DutyCycle`: 8-bit dimmer level, derived from `Intensity` only
//! - `Brightness`: per-channel LED level (0–255)
//!
//! `new` saturates (real-time paths must never stall on a bad value);
//! `try_new` is the strict variant for configuration code.

use thiserror_no_std::Error;

use crate::config::{ADC_MAX, OUT_MAX};

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("value {value} outside {min}..={max}")]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

// ── RawSample ────────────────────────────────────────────────────────────────

/// One ADC conversion result, clamped to 0–[`ADC_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct RawSample(u16);

impl RawSample {
    /// Create a `RawSample`, clamping values above [`ADC_MAX`].
    #[must_use]
    pub const fn new(value: u16) -> Self {
        if value > ADC_MAX {
            Self(ADC_MAX)
        } else {
            Self(value)
        }
    }

    /// Create a `RawSample`, returning an error if `value > ADC_MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value > ADC_MAX`.
    pub fn try_new(value: u16) -> Result<Self, OutOfRangeError> {
        if value > ADC_MAX {
            Err(OutOfRangeError {
                value: u32::from(value),
                min: 0,
                max: u32::from(ADC_MAX),
            })
        } else {
            Ok(Self(value))
        }
    }

    /// Return the ADC count.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

// ── Intensity ────────────────────────────────────────────────────────────────

/// Normalised signal intensity, clamped to 0–[`OUT_MAX`].
///
/// Zero means "below the noise floor"; every genuine signal maps to 1 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Intensity(u16);

impl Intensity {
    /// No signal.
    pub const ZERO: Self = Self(0);

    /// Full scale.
    pub const MAX: Self = Self(OUT_MAX);

    /// Create an `Intensity`, clamping values above [`OUT_MAX`].
    #[must_use]
    pub const fn new(value: u16) -> Self {
        if value > OUT_MAX {
            Self(OUT_MAX)
        } else {
            Self(value)
        }
    }

    /// Create an `Intensity`, returning an error if `value > OUT_MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value > OUT_MAX`.
    pub fn try_new(value: u16) -> Result<Self, OutOfRangeError> {
        if value > OUT_MAX {
            Err(OutOfRangeError {
                value: u32::from(value),
                min: 0,
                max: u32::from(OUT_MAX),
            })
        } else {
            Ok(Self(value))
        }
    }

    /// Return the intensity value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// `true` when the sample was treated as noise.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

// ── DutyCycle ────────────────────────────────────────────────────────────────

/// 8-bit PWM level for the dimmer (0 = off, 255 = fully on).
///
/// Can only be constructed from an [`Intensity`] so the `/16` scaling is
/// applied in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct DutyCycle(u8);

impl DutyCycle {
    /// Fully off.
    pub const OFF: Self = Self(0);

    /// Scale a 12-bit intensity down to the 8-bit PWM wrap.
    ///
    /// `4095 / 16 = 255`, so no clamping is needed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // OUT_MAX >> 4 == 255
    pub fn from_intensity(intensity: Intensity) -> Self {
        Self((intensity.get() >> 4) as u8)
    }

    /// Return the raw duty value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

// ── Brightness ───────────────────────────────────────────────────────────────

/// LED channel brightness (0–255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Channel off.
    pub const OFF: Self = Self(0);

    /// Wrap a raw channel level.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Return the raw channel level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn raw_sample_clamps_to_adc_max() {
        assert_eq!(RawSample::new(u16::MAX).get(), ADC_MAX);
        assert_eq!(RawSample::new(123).get(), 123);
    }

    #[test]
    fn intensity_try_new_rejects_above_out_max() {
        let err = Intensity::try_new(OUT_MAX + 1).unwrap_err();
        assert_eq!(err.max, u32::from(OUT_MAX));
        assert!(Intensity::try_new(OUT_MAX).is_ok());
    }

    #[test]
    fn duty_cycle_covers_full_pwm_range() {
        assert_eq!(DutyCycle::from_intensity(Intensity::ZERO), DutyCycle::OFF);
        assert_eq!(DutyCycle::from_intensity(Intensity::MAX).get(), 255);
        assert_eq!(DutyCycle::from_intensity(Intensity::new(16)).get(), 1);
        assert_eq!(DutyCycle::from_intensity(Intensity::new(15)).get(), 0);
    }
}
