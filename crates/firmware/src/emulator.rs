//! Desktop stand-ins for the board peripherals.
//!
//! Everything here logs through `tracing` instead of touching hardware, so
//! the full pipeline can be watched from a terminal:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example desktop_emulator --features emulator
//! ```

use core::convert::Infallible;

use embassy_time::{Duration, Instant, Timer};
use platform::config::{ADC_MAX, BAR_PIXELS, PIXELS_PER_GROUP};
use platform::{
    AcquisitionSource, Button, ButtonEdge, DimmerChannel, DutyCycle, EdgeSource, LedStrip,
    RawSample, StatusDisplay, StatusLines, ToneChannel, ToneCommand, RGB8,
};

/// Sensor that sweeps up and down the full ADC range.
pub struct TriangleWave {
    value: u16,
    step: u16,
    rising: bool,
}

impl TriangleWave {
    /// Sweep in increments of `step` counts per read.
    pub fn new(step: u16) -> Self {
        Self {
            value: 0,
            step: step.max(1),
            rising: true,
        }
    }
}

impl AcquisitionSource for TriangleWave {
    fn read(&mut self) -> RawSample {
        let sample = RawSample::new(self.value);
        if self.rising {
            self.value = self.value.saturating_add(self.step).min(ADC_MAX);
            if self.value == ADC_MAX {
                self.rising = false;
            }
        } else {
            self.value = self.value.saturating_sub(self.step);
            if self.value == 0 {
                self.rising = true;
            }
        }
        sample
    }
}

/// Indicator LED that logs its level.
#[derive(Default)]
pub struct LogDimmer;

impl DimmerChannel for LogDimmer {
    type Error = Infallible;

    fn set_level(&mut self, level: DutyCycle) -> Result<(), Infallible> {
        tracing::debug!(duty = level.get(), "dimmer");
        Ok(())
    }
}

/// Buzzer that logs frequency and amplitude changes.
#[derive(Default)]
pub struct LogTone {
    last: Option<ToneCommand>,
}

impl ToneChannel for LogTone {
    type Error = Infallible;

    fn set_tone(&mut self, tone: ToneCommand) -> Result<(), Infallible> {
        if self.last != Some(tone) {
            if tone.is_silent() {
                tracing::debug!("tone: silent");
            } else {
                tracing::debug!(hz = tone.frequency_hz, amplitude = tone.amplitude, "tone");
            }
            self.last = Some(tone);
        }
        Ok(())
    }
}

/// Light bar drawn as one character per pixel group.
pub struct TerminalStrip {
    staged: [RGB8; BAR_PIXELS],
}

impl TerminalStrip {
    /// All pixels off.
    pub fn new() -> Self {
        Self {
            staged: [RGB8::default(); BAR_PIXELS],
        }
    }

    /// `#` for a lit group, `.` for a dark one.
    pub fn render(&self) -> heapless::String<BAR_PIXELS> {
        let mut bar = heapless::String::new();
        for group in self.staged.chunks(PIXELS_PER_GROUP) {
            let lit = group.iter().any(|p| *p != RGB8::default());
            let _ = bar.push(if lit { '#' } else { '.' });
        }
        bar
    }
}

impl Default for TerminalStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStrip for TerminalStrip {
    type Error = Infallible;

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    async fn flush(&mut self) -> Result<(), Infallible> {
        tracing::info!(bar = self.render().as_str(), "light bar");
        Ok(())
    }
}

/// Status screen printed line by line.
#[derive(Default)]
pub struct LogDisplay;

impl StatusDisplay for LogDisplay {
    type Error = Infallible;

    async fn render(&mut self, lines: &StatusLines) -> Result<(), Infallible> {
        for (row, line) in lines.iter().enumerate() {
            tracing::info!(row, "| {:<21} |", line.as_str());
        }
        Ok(())
    }
}

/// Button presses replayed from a fixed script.
///
/// Each entry is a delay (from the previous press) and the button pressed.
/// Once the script runs out the source never yields again.
pub struct ScriptedButtons {
    script: &'static [(u64, Button)],
    cursor: usize,
}

impl ScriptedButtons {
    /// Replay `script` from the start.
    pub const fn new(script: &'static [(u64, Button)]) -> Self {
        Self { script, cursor: 0 }
    }
}

impl EdgeSource for ScriptedButtons {
    async fn wait_for_edge(&mut self) -> ButtonEdge {
        let Some(&(delay_ms, button)) = self.script.get(self.cursor) else {
            return core::future::pending().await;
        };
        self.cursor = self.cursor.saturating_add(1);
        Timer::after(Duration::from_millis(delay_ms)).await;
        tracing::info!(button = button.label(), "press");
        ButtonEdge::new(button, Instant::now().as_millis())
    }
}
