//! Input abstraction: the two balance buttons

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Shifts balance towards `a` (volume up)
    A,
    /// Shifts balance towards `b` (volume down)
    B,
}

impl Button {
    /// Both buttons, in index order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Stable index used for per-button records.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// A raw press edge as delivered by the interrupt source.
///
/// `timestamp_ms` comes from a monotonic millisecond clock
/// (`embassy_time::Instant::now().as_millis()` on hardware).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    /// Which button produced the edge
    pub button: Button,
    /// Monotonic time of the edge in milliseconds
    pub timestamp_ms: u64,
}

impl ButtonEdge {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(button: Button, timestamp_ms: u64) -> Self {
        Self {
            button,
            timestamp_ms,
        }
    }
}

/// Source of button edges.
///
/// Hardware implementations wait on an EXTI line; the emulator replays a
/// schedule.
pub trait EdgeSource {
    /// Wait for the next falling (press) edge.
    fn wait_for_edge(&mut self) -> impl core::future::Future<Output = ButtonEdge>;
}
