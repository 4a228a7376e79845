//! Button input.
//!
//! Edge sources only report *that* a button went down and *when*; judging
//! the edge (debounce window, balance headroom) is the
//! [`BalanceCell`]'s job. [`forward_edges`] is the glue: one loop per edge
//! source, feeding every edge into the shared cell.
//!
//! | Feature    | Source               |
//! |------------|----------------------|
//! | `hardware` | [`hardware::ExtiButton`] (GPIO falling edge) |
//! | `emulator` | `crate::emulator::ScriptedButtons`           |

use embassy_sync::blocking_mutex::raw::RawMutex;
use pipeline::BalanceCell;
use platform::EdgeSource;

/// Hardware GPIO buttons (EXTI, active-low).
#[cfg(feature = "hardware")]
pub mod hardware;

pub use platform::{Button, ButtonEdge};

/// Feed every edge from `source` into `cell`, forever.
///
/// Rejected edges are dropped here; the cell has already logged why.
pub async fn forward_edges<E, M>(source: &mut E, cell: &BalanceCell<M>) -> !
where
    E: EdgeSource,
    M: RawMutex,
{
    loop {
        let edge = source.wait_for_edge().await;
        let _ = cell.on_edge(edge);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embassy_futures::select::{select, Either};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use pipeline::Balance;
    use std::collections::VecDeque;

    /// Replays a fixed edge list, then stays pending forever.
    struct Script(VecDeque<ButtonEdge>);

    impl EdgeSource for Script {
        async fn wait_for_edge(&mut self) -> ButtonEdge {
            match self.0.pop_front() {
                Some(edge) => edge,
                None => core::future::pending().await,
            }
        }
    }

    #[tokio::test]
    async fn forwards_until_source_runs_dry() {
        let cell = BalanceCell::<NoopRawMutex>::new(Balance::from_a(5), 200);
        let mut script = Script(
            [
                ButtonEdge::new(Button::B, 1_000),
                ButtonEdge::new(Button::B, 1_050), // bounce
                ButtonEdge::new(Button::B, 1_400),
                ButtonEdge::new(Button::A, 1_500),
            ]
            .into(),
        );

        let forwarding = forward_edges(&mut script, &cell);
        let settle = async {
            for _ in 0..16 {
                tokio::task::yield_now().await;
            }
        };
        match select(forwarding, settle).await {
            Either::First(never) => match never {},
            Either::Second(()) => {}
        }

        let snap = cell.snapshot();
        assert_eq!((snap.balance.a(), snap.balance.b()), (4, 1));
        assert!(script.0.is_empty());
    }
}
