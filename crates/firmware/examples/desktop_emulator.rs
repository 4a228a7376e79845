//! Signal Bar Desktop Emulator
//!
//! Runs the real pipeline against a sweeping fake sensor and a scripted
//! button sequence, logging every actuator update.
//! Run with: cargo run --example desktop_emulator --features emulator
//!
//! Set `RUST_LOG=debug` to see dimmer and tone updates as well.

use anyhow::Context;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use firmware::emulator::{LogDimmer, LogDisplay, LogTone, ScriptedButtons, TerminalStrip, TriangleWave};
use pipeline::{BalanceCell, Devices, Pipeline};
use platform::Button;
use static_cell::StaticCell;
use tracing_subscriber::EnvFilter;

/// Delay since the previous press, then the button. The 50 ms gap is a
/// bounce and gets rejected.
static PRESSES: [(u64, Button); 8] = [
    (1_500, Button::B),
    (400, Button::B),
    (50, Button::B),
    (400, Button::B),
    (1_500, Button::A),
    (400, Button::A),
    (400, Button::A),
    (400, Button::A),
];

static BALANCE: StaticCell<BalanceCell<CriticalSectionRawMutex>> = StaticCell::new();

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("{} - Desktop Emulator", platform::config::app_title());

    let config = firmware::boot::board_config()
        .map_err(anyhow::Error::msg)
        .context("board configuration rejected")?;
    let balance: &'static BalanceCell<CriticalSectionRawMutex> =
        BALANCE.init(BalanceCell::from_config(&config));

    let mut pipeline = Pipeline::new(
        &config,
        balance,
        Devices {
            source: TriangleWave::new(128),
            dimmer: LogDimmer,
            tone: LogTone::default(),
            strip: TerminalStrip::new(),
            display: LogDisplay,
        },
    );
    let mut buttons = ScriptedButtons::new(&PRESSES);

    tokio::select! {
        _ = pipeline.run() => {}
        _ = firmware::input::forward_edges(&mut buttons, balance) => {}
        result = tokio::signal::ctrl_c() => {
            result.context("waiting for Ctrl-C")?;
            tracing::info!("shutting down");
        }
    }
    Ok(())
}
