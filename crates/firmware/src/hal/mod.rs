//! Board-side implementations of the `platform` capability traits.
//!
//! Everything here is written against `embedded-hal` 1.0 traits only, so the
//! same adapters serve the STM32 board and the host tests.

pub mod pwm;

pub use pwm::{PwmDimmer, PwmTone, ToneError, ToneFrequency};
