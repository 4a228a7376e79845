//! Hardware Abstraction Layer (HAL) for the signal bar controller
//!
//! This crate provides trait-based abstractions for every device the control
//! pipeline touches, enabling development and testing without the board.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate)
//!         ↓
//! Control Pipeline (pipeline crate)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (Embassy HAL + PAC)
//! ```
//!
//! # Capabilities
//!
//! - [`AcquisitionSource`] - Analog input, one conversion per tick
//! - [`DimmerChannel`] - PWM indicator LED
//! - [`ToneChannel`] - PWM buzzer
//! - [`LedStrip`] - Addressable light bar
//! - [`StatusDisplay`] - Four-line text display
//! - [`EdgeSource`] - Button press edges
//!
//! # Features
//!
//! - `std`: Enable standard library support and the [`mocks`] module
//! - `defmt`: Enable defmt::Format derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{DimmerChannel, DutyCycle, Intensity};
//!
//! fn drive<D: DimmerChannel>(dimmer: &mut D, intensity: Intensity) {
//!     let _ = dimmer.set_level(DutyCycle::from_intensity(intensity));
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // Embassy no_std: single-threaded, Send bounds not needed

#[cfg(feature = "std")]
extern crate std;

pub mod acquisition;
pub mod actuator;
pub mod config;
pub mod display;
pub mod input;
pub mod led_strip;
pub mod mocks;
pub mod signal_types;

// Re-export main capability traits
pub use acquisition::AcquisitionSource;
pub use actuator::{DimmerChannel, ToneChannel, ToneCommand};
pub use display::{DisplayError, StatusDisplay, StatusLine, StatusLines};
pub use input::{Button, ButtonEdge, EdgeSource};
pub use led_strip::{LedStrip, RGB8};

// Re-export domain newtypes
pub use signal_types::{Brightness, DutyCycle, Intensity, OutOfRangeError, RawSample};
