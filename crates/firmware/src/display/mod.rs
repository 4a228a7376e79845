//! Status display for the signal bar controller
//!
//! The board carries a 128×64 SSD1306 OLED on I2C. [`Ssd1306`] keeps a 1bpp
//! framebuffer and implements [`DrawTarget`](embedded_graphics::draw_target::DrawTarget);
//! [`TextDisplay`] turns any binary-colour draw target into a
//! [`platform::StatusDisplay`].

pub mod ssd1306;
pub mod text;

pub use ssd1306::{Ssd1306, FRAMEBUFFER_SIZE, I2C_ADDRESS};
pub use text::{Present, TextDisplay, LINE_PITCH};

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;
