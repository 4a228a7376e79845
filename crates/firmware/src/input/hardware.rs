//! Hardware GPIO buttons.
//!
//! # Pin assignments
//!
//! | Signal   | MCU pin | Notes                        |
//! |----------|---------|------------------------------|
//! | Button A | PD3     | Active-low, internal pull-up |
//! | Button B | PD4     | Active-low, internal pull-up |
//!
//! Each button gets its own task that waits on the EXTI falling edge and
//! forwards a timestamped [`ButtonEdge`] to the shared balance cell. There is
//! no settle delay here: contact bounce is rejected by the debounce window.

use embassy_executor::{SpawnError, Spawner};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::AnyPin;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Instant;
use pipeline::BalanceCell;
use platform::{Button, ButtonEdge, EdgeSource};

/// An EXTI-capable pin wired to one of the two buttons.
pub struct ExtiButton {
    pin: ExtiInput<'static, AnyPin>,
    button: Button,
}

impl ExtiButton {
    /// Bind `pin` to `button`.
    pub fn new(pin: ExtiInput<'static, AnyPin>, button: Button) -> Self {
        Self { pin, button }
    }
}

impl EdgeSource for ExtiButton {
    async fn wait_for_edge(&mut self) -> ButtonEdge {
        self.pin.wait_for_falling_edge().await;
        ButtonEdge::new(self.button, Instant::now().as_millis())
    }
}

/// Spawn one forwarding task per button.
pub fn spawn_button_tasks(
    spawner: &Spawner,
    buttons: [ExtiButton; 2],
    cell: &'static BalanceCell<CriticalSectionRawMutex>,
) -> Result<(), SpawnError> {
    for button in buttons {
        defmt::info!("button {} armed", button.button.label());
        spawner.spawn(button_task(button, cell))?;
    }
    Ok(())
}

#[embassy_executor::task(pool_size = 2)]
async fn button_task(
    mut button: ExtiButton,
    cell: &'static BalanceCell<CriticalSectionRawMutex>,
) {
    super::forward_edges(&mut button, cell).await
}
