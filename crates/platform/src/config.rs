//! Board configuration and constants
//!
//! Hardware-fixed values shared by the pipeline and the board glue. Anything
//! that is a tuning knob rather than a property of the board lives in
//! `pipeline::config` instead.

/// The application name
pub const APP_NAME: &str = "Signal Bar";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest value the 12-bit ADC can return.
pub const ADC_MAX: u16 = 4095;

/// Largest normalised intensity value.
pub const OUT_MAX: u16 = 4095;

/// Number of pixels on the addressable light bar (5 × 5 matrix).
pub const BAR_PIXELS: usize = 25;

/// Number of brightness groups the bar is split into.
pub const BAR_GROUPS: usize = 5;

/// Pixels per group.
pub const PIXELS_PER_GROUP: usize = BAR_PIXELS / BAR_GROUPS;

/// Number of text lines on the status display.
pub const STATUS_LINES: usize = 4;

/// Characters per status line (128 px panel / 6 px font cell).
pub const STATUS_LINE_CHARS: usize = 21;

/// Dimmer PWM wrap value (8-bit resolution).
pub const DIMMER_PWM_WRAP: u16 = 255;

/// Title shown at boot; `concat!` needs literals, so the name is repeated.
const APP_TITLE: &str = concat!("Signal Bar v", env!("CARGO_PKG_VERSION"));

/// Full application title (name + version)
pub const fn app_title() -> &'static str {
    APP_TITLE
}

const _: () = assert!(BAR_PIXELS % BAR_GROUPS == 0);

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn title_carries_name_and_version() {
        assert!(app_title().starts_with(APP_NAME));
        assert!(app_title().ends_with(APP_VERSION));
        assert_eq!(app_title().len(), APP_NAME.len() + 2 + APP_VERSION.len());
    }
}
