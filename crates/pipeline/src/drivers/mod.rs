//! Actuation drivers
//!
//! Pure functions of `(Intensity, BalanceSnapshot)` plus configuration. They
//! compute device-level outputs; the orchestrator applies them to the
//! platform channels.
//!
//! - [`dimmer`]: 8-bit duty cycle for the indicator LED
//! - [`tone`]: frequency sweep and balance-scaled amplitude for the buzzer
//! - [`light_bar`]: grouped bar-graph brightness for the LED strip

pub mod dimmer;
pub mod light_bar;
pub mod tone;

pub use dimmer::dimmer_level;
pub use light_bar::{LightBar, LightBarFrame};
pub use tone::ToneShaper;
