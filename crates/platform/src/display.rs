//! Status display abstraction

use crate::config::{STATUS_LINES, STATUS_LINE_CHARS};

/// One line of status text.
pub type StatusLine = heapless::String<STATUS_LINE_CHARS>;

/// A full screen of status text.
pub type StatusLines = [StatusLine; STATUS_LINES];

/// Text display for the status lines.
pub trait StatusDisplay {
    /// Error type for display operations
    type Error: core::fmt::Debug;

    /// Replace the whole screen with `lines`.
    fn render(
        &mut self,
        lines: &StatusLines,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error
    Communication,
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Communication => write!(f, "Display communication error"),
        }
    }
}
