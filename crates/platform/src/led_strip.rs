//! Addressable LED strip abstraction

pub use smart_leds::RGB8;

/// Addressable LED strip (WS2812-class, 25 pixels on this board).
///
/// The strip driver transmits bytes exactly as given. Channel bit order on the
/// wire is handled by the caller (see `pipeline::light_bar`), pixel order on
/// the physical matrix is handled by the driver.
pub trait LedStrip {
    /// Error type
    type Error: core::fmt::Debug;

    /// Stage one pixel. `index` is `0..BAR_PIXELS`; out-of-range indices are
    /// ignored.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Transmit the staged pixels. Returns once the hand-off is complete, so
    /// the staging buffer may be reused immediately after.
    fn flush(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}
