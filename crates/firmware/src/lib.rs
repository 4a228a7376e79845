//! Signal Bar Controller Firmware
//!
//! Board support for the signal bar pipeline on STM32H743ZI: PWM channels,
//! the SPI-driven light bar, the SSD1306 status OLED and the button tasks.
//!
//! # Architecture
//!
//! ```text
//! main.rs (hardware) / examples/desktop_emulator.rs (emulator)
//!         ↓
//! pipeline::Pipeline (tick loop, balance cell)
//!         ↓
//! Device adapters (hal, led, display, input)
//!         ↓
//! Platform HAL (Embassy, STM32)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the STM32H7 target (embassy, defmt)
//! - `emulator` - Build the desktop emulator (tokio, tracing)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features hardware
//! ```
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run --example desktop_emulator --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline (allow println in tests via clippy.toml)
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
// Pedantic lints too noisy for firmware application code:
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]
#![allow(clippy::unused_async)]

pub mod boot;
pub mod display;
pub mod hal;
pub mod input;
pub mod led;

#[cfg(feature = "hardware")]
pub mod board;

#[cfg(feature = "emulator")]
pub mod emulator;

// Re-export key types
pub use display::{Ssd1306, TextDisplay, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use hal::{PwmDimmer, PwmTone};
pub use led::SpiLedStrip;
