//! Property-based tests for the pipeline laws.
//! Verifies invariants hold for ALL inputs, not just the worked examples.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects, clippy::indexing_slicing)]

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use pipeline::{BalanceCell, IntensityMapper, LightBar, PipelineConfig, ToneShaper};
use platform::config::OUT_MAX;
use platform::{Button, ButtonEdge, Intensity, RawSample};
use proptest::prelude::*;

fn defaults() -> pipeline::ValidatedConfig {
    PipelineConfig::default().validate().unwrap()
}

fn edges() -> impl Strategy<Value = Vec<(bool, u64)>> {
    prop::collection::vec((any::<bool>(), 0u64..1_000), 0..64)
}

proptest! {
    /// Every sample maps into 0..=OUT_MAX, and to 0 only below the floor.
    #[test]
    fn mapper_output_in_range(raw in any::<u16>()) {
        let mapper = IntensityMapper::new(&defaults());
        let out = mapper.map(RawSample::new(raw));
        prop_assert!(out.get() <= OUT_MAX);
        prop_assert_eq!(out.is_zero(), RawSample::new(raw).get() < mapper.noise_floor());
    }

    /// A louder sample never maps to a lower intensity.
    #[test]
    fn mapper_is_monotone(a in any::<u16>(), b in any::<u16>()) {
        let mapper = IntensityMapper::new(&defaults());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(mapper.map(RawSample::new(lo)) <= mapper.map(RawSample::new(hi)));
    }

    /// Everything at or above the ceiling maps exactly like the ceiling.
    #[test]
    fn mapper_saturates_at_ceiling(ceiling in 61u16..=4095, extra in any::<u16>()) {
        let mapper = IntensityMapper::new(
            &PipelineConfig::default().with_sample_ceiling(ceiling).validate().unwrap(),
        );
        let top = mapper.map(RawSample::new(mapper.sample_ceiling()));
        let raw = mapper.sample_ceiling().saturating_add(extra);
        prop_assert_eq!(mapper.map(RawSample::new(raw)), top);
        prop_assert_eq!(top, Intensity::MAX);
        let below = mapper.map(RawSample::new(ceiling - 1));
        prop_assert!(below <= top);
    }

    /// The bar fills from the bottom: no group is brighter than the one below.
    #[test]
    fn light_bar_fills_bottom_up(v in 0u16..=OUT_MAX) {
        let levels = LightBar::new(&defaults()).group_levels(Intensity::new(v));
        for pair in levels.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    /// More intensity never lights fewer pixels.
    #[test]
    fn light_bar_lit_count_is_monotone(a in 0u16..=OUT_MAX, b in 0u16..=OUT_MAX) {
        let bar = LightBar::new(&defaults());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            bar.frame(Intensity::new(lo)).lit_count() <= bar.frame(Intensity::new(hi)).lit_count()
        );
    }

    /// The tone frequency stays within 200..=2000 Hz and never hits zero.
    #[test]
    fn tone_frequency_in_band(v in 0u16..=OUT_MAX, a in 0u8..=5) {
        let shaper = ToneShaper::new(&defaults());
        let tone = shaper.shape(Intensity::new(v), pipeline::Balance::from_a(a).volume());
        prop_assert!((200..=2000).contains(&tone.frequency_hz));
        prop_assert!(tone.amplitude <= OUT_MAX);
    }

    /// Arbitrary edge sequences keep a + b == 5 and the volume in step.
    #[test]
    fn balance_invariant_under_any_edges(start in 0u8..=5, seq in edges()) {
        let cfg = PipelineConfig::default()
            .with_initial_balance(start, 5 - start)
            .validate()
            .unwrap();
        let cell = BalanceCell::<NoopRawMutex>::from_config(&cfg);
        let mut now = 0u64;
        for (is_a, gap) in seq {
            now += gap;
            let button = if is_a { Button::A } else { Button::B };
            let before = cell.snapshot().balance;
            let result = cell.on_edge(ButtonEdge::new(button, now));
            let snap = cell.snapshot();
            prop_assert_eq!(snap.balance.a() + snap.balance.b(), 5);
            prop_assert_eq!(snap.volume, snap.balance.volume());
            match result {
                Ok(published) => {
                    prop_assert_eq!(published, snap);
                    prop_assert_eq!(snap.balance.component(button), before.component(button) + 1);
                }
                Err(_) => prop_assert_eq!(snap.balance, before),
            }
        }
    }
}
