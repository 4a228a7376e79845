//! Control pipeline for the signal bar controller
//!
//! Turns one analog sample per tick into three outputs (dimmer, tone, light
//! bar) and keeps the two-button balance that scales the tone volume.
//!
//! # Data flow
//!
//! ```text
//! AcquisitionSource ──► IntensityMapper ──┬──► dimmer_level ──► DimmerChannel
//!                                         ├──► ToneShaper ────► ToneChannel
//!                                         └──► LightBar ──────► LedStrip
//!                                                  ▲
//! EdgeSource ──► BalanceCell (DebounceGate) ───────┘ volume
//!                     │
//!                     └──► status::present ──► StatusDisplay
//! ```
//!
//! Every device is reached through a `platform` trait, so the whole pipeline
//! runs on the host against the recording mocks in `platform::mocks`.
//!
//! # Features
//!
//! - `defmt`: log through defmt and derive `defmt::Format` (hardware)
//! - `tracing`: log through tracing (desktop emulator)
//! - `std`: forward `std` to `platform`, exposing its mocks
//!
//! # Example
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use pipeline::{BalanceCell, PipelineConfig};
//!
//! let config = PipelineConfig::default().validate().unwrap();
//! let balance = BalanceCell::<CriticalSectionRawMutex>::from_config(&config);
//! assert_eq!(balance.snapshot().balance.a(), 5);
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
#![warn(clippy::print_stdout)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)] // u8 -> f32 volume is exact

// Must come first: the logging macros are used by every module below.
#[macro_use]
mod fmt;

pub mod balance;
pub mod config;
pub mod debounce;
pub mod drivers;
pub mod error;
pub mod mapper;
pub mod orchestrator;
pub mod shared;
pub mod status;

pub use balance::{Balance, BalanceSnapshot, Shift, VolumeMultiplier};
pub use config::{PipelineConfig, ValidatedConfig};
pub use debounce::{DebounceGate, Rejection};
pub use drivers::{dimmer_level, LightBar, LightBarFrame, ToneShaper};
pub use error::ConfigError;
pub use mapper::IntensityMapper;
pub use orchestrator::{ActuationFrame, Devices, Phase, Pipeline};
pub use shared::BalanceCell;
