//! PWM-backed dimmer and tone channels.
//!
//! The dimmer maps the 8-bit [`DutyCycle`] onto whatever resolution the timer
//! has, so `255` is always fully on. The tone channel drives a passive buzzer:
//! frequency sets the pitch and amplitude sets the duty, with full amplitude
//! at 50 % (a square wave is loudest there).

use embedded_hal::pwm::SetDutyCycle;
use platform::config::{DIMMER_PWM_WRAP, OUT_MAX};
use platform::{DimmerChannel, DutyCycle, ToneChannel, ToneCommand};

/// A PWM output whose period can be changed at runtime.
pub trait ToneFrequency {
    /// Error type
    type Error: core::fmt::Debug;

    /// Retune the output to `hz`. Callers never pass zero.
    fn set_frequency_hz(&mut self, hz: u16) -> Result<(), Self::Error>;
}

/// PWM LED dimmer.
pub struct PwmDimmer<P> {
    pwm: P,
}

impl<P: SetDutyCycle> PwmDimmer<P> {
    /// Wrap a PWM channel. The output is not touched until the first level.
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Borrow the PWM channel.
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Release the PWM channel.
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> DimmerChannel for PwmDimmer<P> {
    type Error = P::Error;

    fn set_level(&mut self, level: DutyCycle) -> Result<(), Self::Error> {
        if level == DutyCycle::OFF {
            return self.pwm.set_duty_cycle_fully_off();
        }
        self.pwm
            .set_duty_cycle_fraction(u16::from(level.get()), DIMMER_PWM_WRAP)
    }
}

/// Buzzer errors: either half of the PWM can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError<D, F> {
    /// Duty update failed
    Duty(D),
    /// Frequency update failed
    Frequency(F),
}

/// PWM buzzer.
pub struct PwmTone<P> {
    pwm: P,
    frequency_hz: u16,
}

impl<P> PwmTone<P>
where
    P: SetDutyCycle + ToneFrequency,
{
    /// Wrap a PWM channel.
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            frequency_hz: 0,
        }
    }

    /// Frequency the timer is currently tuned to (0 before the first tone).
    pub fn frequency_hz(&self) -> u16 {
        self.frequency_hz
    }

    /// Borrow the PWM channel.
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Release the PWM channel.
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P> ToneChannel for PwmTone<P>
where
    P: SetDutyCycle + ToneFrequency,
{
    type Error = ToneError<<P as embedded_hal::pwm::ErrorType>::Error, <P as ToneFrequency>::Error>;

    fn set_tone(&mut self, tone: ToneCommand) -> Result<(), Self::Error> {
        if tone.is_silent() {
            return self.pwm.set_duty_cycle_fully_off().map_err(ToneError::Duty);
        }
        // Retuning resets the timer; skip it when the pitch did not move.
        if tone.frequency_hz != self.frequency_hz && tone.frequency_hz != 0 {
            self.pwm
                .set_frequency_hz(tone.frequency_hz)
                .map_err(ToneError::Frequency)?;
            self.frequency_hz = tone.frequency_hz;
        }
        let amplitude = tone.amplitude.min(OUT_MAX);
        self.pwm
            .set_duty_cycle_fraction(amplitude, OUT_MAX.saturating_mul(2))
            .map_err(ToneError::Duty)
    }
}
