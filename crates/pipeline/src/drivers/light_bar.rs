//! Light-bar driver: a 25-pixel bar graph in five groups of five.
//!
//! The intensity range `0..=ceiling` is cut into five equal spans. Groups
//! below the one the intensity falls in are fully lit, groups above are off,
//! and the active group is lit in proportion to
//! `intensity / upper_edge_of_active_group`. The bar therefore fills
//! monotonically, with continuous brightness only in its leading group.
//!
//! Channel bytes are bit-reversed on their way to the strip: the LED wire
//! format shifts each byte out MSB-first while the strip transmitter shifts
//! LSB-first. Frame contents stay in natural bit order; only
//! [`LightBarFrame::write_to`] applies the transform.

use platform::config::{BAR_GROUPS, BAR_PIXELS, PIXELS_PER_GROUP};
use platform::{Brightness, Intensity, LedStrip, RGB8};

use crate::config::ValidatedConfig;

/// Channel mask per group, bottom to top: green, green, yellow, yellow, red.
pub const GROUP_PALETTE: [RGB8; BAR_GROUPS] = [
    RGB8::new(0, 1, 0),
    RGB8::new(0, 1, 0),
    RGB8::new(1, 1, 0),
    RGB8::new(1, 1, 0),
    RGB8::new(1, 0, 0),
];

/// Bar-graph geometry: full-scale intensity and peak channel level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightBar {
    ceiling: u16,
    max_brightness: u8,
}

impl LightBar {
    /// Build from a validated configuration.
    pub fn new(config: &ValidatedConfig) -> Self {
        let cfg = config.get();
        Self {
            ceiling: cfg.light_bar_ceiling,
            max_brightness: cfg.max_brightness,
        }
    }

    /// Brightness of each group for `intensity`.
    pub fn group_levels(&self, intensity: Intensity) -> [Brightness; BAR_GROUPS] {
        let max = u32::from(self.max_brightness);
        let ceiling = u32::from(self.ceiling);
        let groups = u32::try_from(BAR_GROUPS).unwrap_or(u32::MAX);
        let span = ceiling.checked_div(groups).unwrap_or(0).max(1);
        let level = u32::from(intensity.get()).min(ceiling);
        let active = level.checked_div(span).unwrap_or(0).min(groups.saturating_sub(1));

        core::array::from_fn(|g| {
            let g = u32::try_from(g).unwrap_or(u32::MAX);
            let value = match g.cmp(&active) {
                core::cmp::Ordering::Less => max,
                core::cmp::Ordering::Greater => 0,
                core::cmp::Ordering::Equal => {
                    let upper = g.saturating_add(1).saturating_mul(span);
                    max.saturating_mul(level)
                        .checked_div(upper)
                        .unwrap_or(0)
                        .min(max)
                }
            };
            Brightness::new(u8::try_from(value).unwrap_or(self.max_brightness))
        })
    }

    /// Pixel colours for `intensity`; pixel `5g..5g+4` belongs to group `g`.
    pub fn frame(&self, intensity: Intensity) -> LightBarFrame {
        let levels = self.group_levels(intensity);
        let pixels = core::array::from_fn(|index| {
            let group = index.checked_div(PIXELS_PER_GROUP).unwrap_or(0);
            let level = levels.get(group).copied().unwrap_or(Brightness::OFF).get();
            let mask = GROUP_PALETTE.get(group).copied().unwrap_or_default();
            RGB8::new(
                mask.r.saturating_mul(level),
                mask.g.saturating_mul(level),
                mask.b.saturating_mul(level),
            )
        });
        LightBarFrame { pixels }
    }
}

/// One computed bar-graph frame, in natural bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightBarFrame {
    pixels: [RGB8; BAR_PIXELS],
}

impl LightBarFrame {
    /// Every pixel off.
    pub const fn dark() -> Self {
        Self {
            pixels: [RGB8::new(0, 0, 0); BAR_PIXELS],
        }
    }

    /// Pixel colours.
    pub const fn pixels(&self) -> &[RGB8; BAR_PIXELS] {
        &self.pixels
    }

    /// Number of pixels with any channel on.
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| p.r != 0 || p.g != 0 || p.b != 0)
            .count()
    }

    /// Stage every pixel (bit-reversed) and flush.
    ///
    /// The flush is awaited, so the strip has taken the whole frame before the
    /// caller can start computing the next one.
    pub async fn write_to<L: LedStrip>(&self, strip: &mut L) -> Result<(), L::Error> {
        for (index, pixel) in self.pixels.iter().enumerate() {
            strip.set_pixel(index, wire_color(*pixel));
        }
        strip.flush().await
    }
}

/// Reverse the bit order of each channel byte.
pub const fn wire_color(color: RGB8) -> RGB8 {
    RGB8::new(
        color.r.reverse_bits(),
        color.g.reverse_bits(),
        color.b.reverse_bits(),
    )
}
