//! Balance cell: the state shared between button handlers and the tick loop.
//!
//! Button handlers run in interrupt-driven tasks that may preempt the tick
//! loop at any point. Everything they touch (the debounce records, the
//! balance and its volume projection) sits behind one
//! [`blocking_mutex::Mutex`], so an edge is judged and applied in a single
//! critical section and readers always copy out a whole [`BalanceSnapshot`].
//!
//! After each accepted edge the new snapshot is also raised on a [`Signal`],
//! which the orchestrator waits on to push the change to the display and the
//! tone channel before the next tick.
//!
//! On hardware `M` is `CriticalSectionRawMutex`: the lock is held for a copy,
//! a comparison and a copy back, a handful of instructions with interrupts
//! masked.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use platform::ButtonEdge;

use crate::balance::{Balance, BalanceSnapshot};
use crate::config::ValidatedConfig;
use crate::debounce::{DebounceGate, Rejection};

#[derive(Clone, Copy)]
struct GateState {
    gate: DebounceGate,
    snapshot: BalanceSnapshot,
}

/// Process-lifetime owner of the balance and the debounce records.
pub struct BalanceCell<M: RawMutex> {
    state: Mutex<M, Cell<GateState>>,
    changed: Signal<M, BalanceSnapshot>,
}

impl<M: RawMutex> BalanceCell<M> {
    /// Create the cell from raw parts.
    pub fn new(initial: Balance, debounce_ms: u64) -> Self {
        Self {
            state: Mutex::new(Cell::new(GateState {
                gate: DebounceGate::new(debounce_ms),
                snapshot: BalanceSnapshot::new(initial),
            })),
            changed: Signal::new(),
        }
    }

    /// Create the cell from a validated configuration.
    pub fn from_config(config: &ValidatedConfig) -> Self {
        Self::new(config.initial_balance(), config.get().debounce_ms)
    }

    /// Feed one press edge. Safe to call from any context, including
    /// concurrently with [`snapshot`](Self::snapshot).
    ///
    /// Returns the published snapshot when the edge was accepted.
    pub fn on_edge(&self, edge: ButtonEdge) -> Result<BalanceSnapshot, Rejection> {
        let result: Result<BalanceSnapshot, Rejection> = self.state.lock(|cell| {
            let mut state = cell.get();
            let shift = state.gate.check(edge, state.snapshot.balance)?;
            state.snapshot = BalanceSnapshot::new(state.snapshot.balance.apply(shift));
            cell.set(state);
            Ok(state.snapshot)
        });
        match result {
            Ok(snapshot) => {
                debug!(
                    "edge {} @{}ms accepted, balance {}:{}",
                    edge.button.label(),
                    edge.timestamp_ms,
                    snapshot.balance.a(),
                    snapshot.balance.b()
                );
                self.changed.signal(snapshot);
            }
            Err(reason) => {
                debug!(
                    "edge {} @{}ms rejected: {}",
                    edge.button.label(),
                    edge.timestamp_ms,
                    reason.as_str()
                );
            }
        }
        result
    }

    /// Copy out the current balance and volume as one consistent value.
    pub fn snapshot(&self) -> BalanceSnapshot {
        self.state.lock(|cell| cell.get().snapshot)
    }

    /// Wait until an edge is accepted, returning the newest snapshot.
    ///
    /// Several accepted edges between two waits collapse into the latest one.
    pub async fn wait_changed(&self) -> BalanceSnapshot {
        self.changed.wait().await
    }

    /// Take a pending change notification without waiting.
    pub fn take_changed(&self) -> Option<BalanceSnapshot> {
        self.changed.try_take()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use platform::Button;

    fn cell(a: u8) -> BalanceCell<NoopRawMutex> {
        BalanceCell::new(Balance::from_a(a), 200)
    }

    #[test]
    fn accepted_edge_publishes_snapshot_and_signal() {
        let cell = cell(2);
        let snap = cell.on_edge(ButtonEdge::new(Button::A, 0)).unwrap();
        assert_eq!(snap.balance, Balance::from_a(3));
        assert_eq!(cell.snapshot(), snap);
        assert_eq!(cell.take_changed(), Some(snap));
        assert_eq!(cell.take_changed(), None);
    }

    #[test]
    fn rejected_edge_changes_nothing() {
        let cell = cell(5);
        let before = cell.snapshot();
        assert_eq!(
            cell.on_edge(ButtonEdge::new(Button::A, 0)),
            Err(Rejection::NoHeadroom)
        );
        assert_eq!(cell.snapshot(), before);
        assert_eq!(cell.take_changed(), None);
    }

    #[test]
    fn bounce_reports_too_soon_and_keeps_balance() {
        let cell = cell(2);
        let first = cell.on_edge(ButtonEdge::new(Button::B, 1_000)).unwrap();
        assert_eq!(cell.take_changed(), Some(first));
        assert_eq!(
            cell.on_edge(ButtonEdge::new(Button::B, 1_200)),
            Err(Rejection::TooSoon)
        );
        assert_eq!(cell.snapshot(), first);
        assert_eq!(cell.take_changed(), None);
    }

    #[test]
    fn five_spaced_presses_walk_the_line() {
        let cell = cell(0);
        for step in 1..=5u8 {
            let t = u64::from(step) * 250;
            let snap = cell.on_edge(ButtonEdge::new(Button::A, t)).unwrap();
            assert_eq!(snap.balance.a(), step);
            assert_eq!(snap.balance.b(), 5 - step);
            assert_eq!(snap.volume.get(), f32::from(step) * 0.2);
        }
        assert_eq!(
            cell.on_edge(ButtonEdge::new(Button::A, 2_000)),
            Err(Rejection::NoHeadroom)
        );
    }

    #[tokio::test]
    async fn wait_changed_returns_latest() {
        let cell = cell(1);
        cell.on_edge(ButtonEdge::new(Button::A, 0)).unwrap();
        cell.on_edge(ButtonEdge::new(Button::B, 0)).unwrap();
        let snap = cell.wait_changed().await;
        assert_eq!(snap.balance, Balance::from_a(1));
    }

    #[test]
    fn concurrent_edges_never_tear() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let cell: Arc<BalanceCell<CriticalSectionRawMutex>> =
            Arc::new(BalanceCell::new(Balance::from_a(2), 0));
        let done = Arc::new(AtomicBool::new(false));

        let writers: Vec<_> = Button::ALL
            .into_iter()
            .map(|button| {
                let cell = Arc::clone(&cell);
                std::thread::spawn(move || {
                    for t in 0..20_000u64 {
                        let _ = cell.on_edge(ButtonEdge::new(button, t));
                    }
                })
            })
            .collect();

        let reader = {
            let cell = Arc::clone(&cell);
            let done = Arc::clone(&done);
            std::thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    let snap = cell.snapshot();
                    assert_eq!(snap.balance.a() + snap.balance.b(), 5);
                    assert_eq!(snap.volume.get(), f32::from(snap.balance.a()) * 0.2);
                }
            })
        };

        for w in writers {
            w.join().unwrap();
        }
        done.store(true, Ordering::Relaxed);
        reader.join().unwrap();
    }
}
