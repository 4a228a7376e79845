//! Type system enforcement tests for the signal newtypes.
//! Raw ADC counts, intensities and PWM levels must never be confused.

#![allow(clippy::unwrap_used)]

use platform::config::{ADC_MAX, OUT_MAX};
use platform::{Brightness, DutyCycle, Intensity, RawSample};

// ── RawSample ────────────────────────────────────────────────────────────────

#[test]
fn raw_sample_new_clamps_over_adc_max() {
    assert_eq!(RawSample::new(5000).get(), ADC_MAX);
}

#[test]
fn raw_sample_try_new_rejects_over_adc_max() {
    let err = RawSample::try_new(ADC_MAX + 1).unwrap_err();
    assert_eq!(err.value, u32::from(ADC_MAX) + 1);
    assert_eq!(err.min, 0);
    assert_eq!(err.max, u32::from(ADC_MAX));
}

#[test]
fn raw_sample_try_new_accepts_full_range() {
    assert!(RawSample::try_new(0).is_ok());
    assert!(RawSample::try_new(ADC_MAX).is_ok());
}

#[test]
fn raw_sample_is_two_bytes() {
    assert_eq!(core::mem::size_of::<RawSample>(), 2);
}

// ── Intensity ────────────────────────────────────────────────────────────────

#[test]
fn intensity_constants_span_output_range() {
    assert_eq!(Intensity::ZERO.get(), 0);
    assert_eq!(Intensity::MAX.get(), OUT_MAX);
    assert!(Intensity::ZERO.is_zero());
    assert!(!Intensity::new(1).is_zero());
}

#[test]
fn intensity_new_clamps() {
    assert_eq!(Intensity::new(u16::MAX), Intensity::MAX);
}

#[test]
fn out_of_range_error_message() {
    let err = Intensity::try_new(5000).unwrap_err();
    assert_eq!(err.to_string(), "value 5000 outside 0..=4095");
}

// ── DutyCycle / Brightness ───────────────────────────────────────────────────

#[test]
fn duty_cycle_is_intensity_over_sixteen() {
    assert_eq!(DutyCycle::from_intensity(Intensity::new(2016)).get(), 126);
    assert_eq!(DutyCycle::from_intensity(Intensity::new(1)).get(), 0);
}

#[test]
fn brightness_round_trips_raw_level() {
    assert_eq!(Brightness::new(64).get(), 64);
    assert_eq!(Brightness::OFF.get(), 0);
}
