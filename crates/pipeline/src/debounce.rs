//! Debounce gate: turns raw press edges into balance shifts.
//!
//! An edge from button `X` is accepted iff
//!
//! - more than `window_ms` elapsed since the last *accepted* edge from `X`, and
//! - `X`'s balance component is below 5.
//!
//! Rejected edges leave the gate untouched, so a bouncing contact cannot push
//! the window forward. The first edge after boot has nothing to compare
//! against and only needs headroom.

use platform::{Button, ButtonEdge};

use crate::balance::{Balance, Shift};

/// Why an edge was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// Inside the debounce window of the previous accepted edge.
    TooSoon,
    /// The button's balance component is already at 5.
    NoHeadroom,
}

impl Rejection {
    /// Short label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooSoon => "too soon",
            Self::NoHeadroom => "no headroom",
        }
    }
}

/// Per-button last-accepted timestamps plus the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    window_ms: u64,
    last_accepted: [Option<u64>; 2],
}

impl DebounceGate {
    /// A gate that has accepted nothing yet.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted: [None, None],
        }
    }

    /// Timestamp of the last accepted edge from `button`.
    pub fn last_accepted(&self, button: Button) -> Option<u64> {
        self.last_accepted.get(button.index()).copied().flatten()
    }

    /// Judge `edge` against the current `balance`.
    ///
    /// On acceptance the button's record is moved to `edge.timestamp_ms`.
    pub fn check(&mut self, edge: ButtonEdge, balance: Balance) -> Result<Shift, Rejection> {
        let ButtonEdge {
            button,
            timestamp_ms,
        } = edge;
        if let Some(last) = self.last_accepted(button) {
            if timestamp_ms.wrapping_sub(last) <= self.window_ms {
                return Err(Rejection::TooSoon);
            }
        }
        if !balance.has_headroom(button) {
            return Err(Rejection::NoHeadroom);
        }
        if let Some(slot) = self.last_accepted.get_mut(button.index()) {
            *slot = Some(timestamp_ms);
        }
        Ok(Shift::towards(button))
    }

    /// [`check`](Self::check) without the reason.
    pub fn on_edge(&mut self, edge: ButtonEdge, balance: Balance) -> Option<Shift> {
        self.check(edge, balance).ok()
    }
}
