//! Pipeline configuration and constants
//!
//! Every tuning knob of the pipeline lives here. Deployment variants differ
//! only in the [`PipelineConfig`] they validate at startup; the tick loop can
//! only be built from a [`ValidatedConfig`].

use platform::config::{ADC_MAX, BAR_GROUPS};

use crate::balance::{Balance, BALANCE_TOTAL};
use crate::error::ConfigError;

/// Samples below this count are treated as noise.
pub const NOISE_FLOOR: u16 = 60;

/// Samples above this count saturate to full intensity.
pub const SAMPLE_CEILING: u16 = 4000;

/// Minimum spacing between accepted edges on the same button.
pub const DEBOUNCE_MS: u64 = 200;

/// Orchestrator cadence.
pub const TICK_PERIOD_MS: u64 = 100;

/// Intensity at which the light bar is completely full.
///
/// Distinct from [`SAMPLE_CEILING`]: it targets peak antenna coupling, not
/// peak voltage.
pub const LIGHT_BAR_CEILING: u16 = 2600;

/// Channel level of a fully lit light-bar pixel.
pub const MAX_BRIGHTNESS: u8 = 64;

/// Extra amplitude divisor that keeps the buzzer out of clipping.
pub const TONE_GAIN_DIVISOR: u16 = 4;

/// Tone frequency at zero intensity.
pub const TONE_MIN_HZ: u16 = 200;

/// Tone sweep width; full intensity plays `TONE_MIN_HZ + TONE_SPAN_HZ`.
pub const TONE_SPAN_HZ: u16 = 1800;

/// Balance at power-on, as `(a, b)`.
pub const INITIAL_BALANCE: (u8, u8) = (5, 0);

/// Raw (unvalidated) pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PipelineConfig {
    /// See [`NOISE_FLOOR`]
    pub noise_floor: u16,
    /// See [`SAMPLE_CEILING`]
    pub sample_ceiling: u16,
    /// See [`DEBOUNCE_MS`]; zero disables debouncing
    pub debounce_ms: u64,
    /// See [`TICK_PERIOD_MS`]
    pub tick_period_ms: u64,
    /// See [`LIGHT_BAR_CEILING`]
    pub light_bar_ceiling: u16,
    /// See [`MAX_BRIGHTNESS`]
    pub max_brightness: u8,
    /// See [`TONE_GAIN_DIVISOR`]
    pub tone_gain_divisor: u16,
    /// See [`TONE_MIN_HZ`]
    pub tone_min_hz: u16,
    /// See [`TONE_SPAN_HZ`]
    pub tone_span_hz: u16,
    /// See [`INITIAL_BALANCE`]
    pub initial_balance: (u8, u8),
}

impl PipelineConfig {
    /// The board defaults.
    pub const fn default_config() -> Self {
        Self {
            noise_floor: NOISE_FLOOR,
            sample_ceiling: SAMPLE_CEILING,
            debounce_ms: DEBOUNCE_MS,
            tick_period_ms: TICK_PERIOD_MS,
            light_bar_ceiling: LIGHT_BAR_CEILING,
            max_brightness: MAX_BRIGHTNESS,
            tone_gain_divisor: TONE_GAIN_DIVISOR,
            tone_min_hz: TONE_MIN_HZ,
            tone_span_hz: TONE_SPAN_HZ,
            initial_balance: INITIAL_BALANCE,
        }
    }

    /// Set the noise floor.
    #[must_use]
    pub const fn with_noise_floor(mut self, floor: u16) -> Self {
        self.noise_floor = floor;
        self
    }

    /// Set the sample ceiling.
    #[must_use]
    pub const fn with_sample_ceiling(mut self, ceiling: u16) -> Self {
        self.sample_ceiling = ceiling;
        self
    }

    /// Set the debounce window.
    #[must_use]
    pub const fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the tick period.
    #[must_use]
    pub const fn with_tick_period_ms(mut self, ms: u64) -> Self {
        self.tick_period_ms = ms;
        self
    }

    /// Set the tone amplitude divisor (1 = no extra attenuation).
    #[must_use]
    pub const fn with_tone_gain_divisor(mut self, divisor: u16) -> Self {
        self.tone_gain_divisor = divisor;
        self
    }

    /// Set the power-on balance.
    #[must_use]
    pub const fn with_initial_balance(mut self, a: u8, b: u8) -> Self {
        self.initial_balance = (a, b);
        self
    }

    /// Set the light-bar ceiling and peak brightness.
    #[must_use]
    pub const fn with_light_bar(mut self, ceiling: u16, max_brightness: u8) -> Self {
        self.light_bar_ceiling = ceiling;
        self.max_brightness = max_brightness;
        self
    }

    /// Check every startup invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.sample_ceiling <= self.noise_floor {
            return Err(ConfigError::CeilingNotAboveFloor {
                floor: self.noise_floor,
                ceiling: self.sample_ceiling,
            });
        }
        if self.sample_ceiling > ADC_MAX {
            return Err(ConfigError::CeilingAboveAdcMax {
                ceiling: self.sample_ceiling,
                adc_max: ADC_MAX,
            });
        }
        let (a, b) = self.initial_balance;
        let Some(initial) = Balance::try_new(a, b) else {
            return Err(ConfigError::InvalidInitialBalance { a, b });
        };
        if usize::from(self.light_bar_ceiling) < BAR_GROUPS {
            return Err(ConfigError::LightBarCeilingTooSmall(self.light_bar_ceiling));
        }
        if self.tone_gain_divisor == 0 {
            return Err(ConfigError::ZeroToneGain);
        }
        if self.tone_min_hz == 0 {
            return Err(ConfigError::ZeroToneFrequency);
        }
        if self.tone_min_hz.checked_add(self.tone_span_hz).is_none() {
            return Err(ConfigError::ToneRangeOverflow {
                min_hz: self.tone_min_hz,
                span_hz: self.tone_span_hz,
            });
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        debug_assert_eq!(initial.a().saturating_add(initial.b()), BALANCE_TOTAL);
        Ok(ValidatedConfig {
            inner: self,
            initial,
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// A configuration that passed [`PipelineConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidatedConfig {
    inner: PipelineConfig,
    initial: Balance,
}

impl ValidatedConfig {
    /// The underlying values.
    pub const fn get(&self) -> &PipelineConfig {
        &self.inner
    }

    /// The power-on balance.
    pub const fn initial_balance(&self) -> Balance {
        self.initial
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = PipelineConfig::default().validate().unwrap();
        assert_eq!(cfg.initial_balance(), Balance::try_new(5, 0).unwrap());
        assert_eq!(cfg.get().noise_floor, 60);
    }

    #[test]
    fn ceiling_must_exceed_floor() {
        let err = PipelineConfig::default()
            .with_noise_floor(4000)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::CeilingNotAboveFloor {
                floor: 4000,
                ceiling: 4000
            }
        );
    }

    #[test]
    fn ceiling_must_fit_adc() {
        let err = PipelineConfig::default()
            .with_sample_ceiling(5000)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::CeilingAboveAdcMax { .. }));
    }

    #[test]
    fn one_five_initial_balance_is_rejected() {
        let err = PipelineConfig::default()
            .with_initial_balance(1, 5)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidInitialBalance { a: 1, b: 5 });
    }

    #[test]
    fn zero_gain_and_zero_period_are_rejected() {
        assert_eq!(
            PipelineConfig::default()
                .with_tone_gain_divisor(0)
                .validate()
                .unwrap_err(),
            ConfigError::ZeroToneGain
        );
        assert_eq!(
            PipelineConfig::default()
                .with_tick_period_ms(0)
                .validate()
                .unwrap_err(),
            ConfigError::ZeroTickPeriod
        );
    }

    #[test]
    fn tiny_light_bar_ceiling_is_rejected() {
        let err = PipelineConfig::default()
            .with_light_bar(4, 64)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::LightBarCeilingTooSmall(4));
    }

    #[test]
    fn zero_debounce_window_is_allowed() {
        assert!(PipelineConfig::default()
            .with_debounce_ms(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn error_messages_render() {
        use core::fmt::Write as _;
        let mut s = heapless::String::<64>::new();
        write!(s, "{}", ConfigError::ZeroTickPeriod).unwrap();
        assert_eq!(s.as_str(), "tick period must be non-zero");
    }
}
