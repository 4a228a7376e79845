//! Mock implementations for testing
//!
//! This module provides recording mock implementations of all platform
//! capabilities for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use std::vec::Vec;

use crate::*;

/// Scripted acquisition source: replays `samples`, then repeats the last one.
pub struct MockAcquisition {
    samples: Vec<u16>,
    cursor: usize,
    reads: usize,
}

impl MockAcquisition {
    /// Create a source that replays `samples` in order.
    pub fn new(samples: &[u16]) -> Self {
        Self {
            samples: samples.to_vec(),
            cursor: 0,
            reads: 0,
        }
    }

    /// Number of conversions performed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AcquisitionSource for MockAcquisition {
    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    fn read(&mut self) -> RawSample {
        self.reads += 1;
        let value = self
            .samples
            .get(self.cursor)
            .or_else(|| self.samples.last())
            .copied()
            .unwrap_or(0);
        if self.cursor < self.samples.len() {
            self.cursor += 1;
        }
        RawSample::new(value)
    }
}

/// Mock status display, keeps every rendered screen.
#[derive(Default)]
pub struct MockDisplay {
    screens: Vec<StatusLines>,
}

impl MockDisplay {
    /// Create new mock display
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders performed
    pub fn render_count(&self) -> usize {
        self.screens.len()
    }

    /// Most recently rendered screen
    pub fn last(&self) -> Option<&StatusLines> {
        self.screens.last()
    }
}

impl StatusDisplay for MockDisplay {
    type Error = core::convert::Infallible;

    async fn render(&mut self, lines: &StatusLines) -> Result<(), Self::Error> {
        self.screens.push(lines.clone());
        Ok(())
    }
}

/// Mock LED strip, records staged pixels and every flushed frame.
pub struct MockLedStrip {
    staged: [RGB8; config::BAR_PIXELS],
    frames: Vec<[RGB8; config::BAR_PIXELS]>,
}

impl MockLedStrip {
    /// Create a strip with every pixel off.
    pub fn new() -> Self {
        Self {
            staged: [RGB8::default(); config::BAR_PIXELS],
            frames: Vec::new(),
        }
    }

    /// Every flushed frame, oldest first.
    pub fn frames(&self) -> &[[RGB8; config::BAR_PIXELS]] {
        &self.frames
    }

    /// The most recently flushed frame.
    pub fn last_frame(&self) -> Option<&[RGB8; config::BAR_PIXELS]> {
        self.frames.last()
    }
}

impl Default for MockLedStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStrip for MockLedStrip {
    type Error = core::convert::Infallible;

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.frames.push(self.staged);
        Ok(())
    }
}

/// Mock dimmer, records every level written.
#[derive(Default)]
pub struct MockDimmer {
    /// Levels in write order
    pub levels: Vec<DutyCycle>,
}

impl MockDimmer {
    /// Create new mock dimmer
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent level, if any was written.
    pub fn last(&self) -> Option<DutyCycle> {
        self.levels.last().copied()
    }
}

impl DimmerChannel for MockDimmer {
    type Error = core::convert::Infallible;

    fn set_level(&mut self, level: DutyCycle) -> Result<(), Self::Error> {
        self.levels.push(level);
        Ok(())
    }
}

/// Mock tone generator, records every command written.
#[derive(Default)]
pub struct MockTone {
    /// Commands in write order
    pub commands: Vec<ToneCommand>,
}

impl MockTone {
    /// Create new mock tone generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent command, if any was written.
    pub fn last(&self) -> Option<ToneCommand> {
        self.commands.last().copied()
    }
}

impl ToneChannel for MockTone {
    type Error = core::convert::Infallible;

    fn set_tone(&mut self, tone: ToneCommand) -> Result<(), Self::Error> {
        self.commands.push(tone);
        Ok(())
    }
}

/// Dimmer that always fails, exercises the log-and-continue path.
#[derive(Default)]
pub struct FailingDimmer;

impl DimmerChannel for FailingDimmer {
    type Error = ();

    fn set_level(&mut self, _level: DutyCycle) -> Result<(), Self::Error> {
        Err(())
    }
}
