//! Property-based tests for the signal newtypes.

use platform::config::{ADC_MAX, OUT_MAX};
use platform::{DutyCycle, Intensity, RawSample, ToneCommand};

proptest::proptest! {
    /// RawSample::new never exceeds the ADC range.
    #[test]
    fn raw_sample_always_in_range(v in proptest::num::u16::ANY) {
        assert!(RawSample::new(v).get() <= ADC_MAX);
    }

    /// new and try_new agree on every in-range value.
    #[test]
    fn intensity_new_matches_try_new(v in 0u16..=OUT_MAX) {
        assert_eq!(Intensity::try_new(v), Ok(Intensity::new(v)));
    }

    /// Higher intensity never gives a dimmer duty cycle.
    #[test]
    fn duty_cycle_is_monotone(a in 0u16..=OUT_MAX, b in 0u16..=OUT_MAX) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(
            DutyCycle::from_intensity(Intensity::new(lo))
                <= DutyCycle::from_intensity(Intensity::new(hi))
        );
    }

    /// Any non-zero frequency has a period.
    #[test]
    fn tone_period_defined_for_nonzero_frequency(hz in 1u16..=u16::MAX) {
        let tone = ToneCommand { frequency_hz: hz, amplitude: 0 };
        assert!(tone.period_us().is_some());
    }
}
