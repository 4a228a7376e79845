//! Four-line status text on any monochrome draw target.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use platform::{StatusDisplay, StatusLines};

/// Vertical distance between line tops, in pixels.
pub const LINE_PITCH: i32 = 12;

/// A draw target that buffers pixels and needs an explicit push to the panel.
///
/// Targets that draw straight to the glass keep the default no-op.
pub trait Present: DrawTarget {
    /// Make everything drawn so far visible.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// [`StatusDisplay`] over a binary-colour draw target.
pub struct TextDisplay<D> {
    target: D,
}

impl<D> TextDisplay<D>
where
    D: DrawTarget<Color = BinaryColor> + Present,
{
    /// Wrap a draw target.
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the underlying target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Release the underlying target.
    pub fn into_inner(self) -> D {
        self.target
    }

    fn draw_lines(&mut self, lines: &StatusLines) -> Result<(), D::Error> {
        self.target.clear(BinaryColor::Off)?;
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let mut top = 0;
        for line in lines {
            Text::with_baseline(line.as_str(), Point::new(0, top), style, Baseline::Top)
                .draw(&mut self.target)?;
            top = top.saturating_add(LINE_PITCH);
        }
        self.target.present()
    }
}

impl<D> StatusDisplay for TextDisplay<D>
where
    D: DrawTarget<Color = BinaryColor> + Present,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    async fn render(&mut self, lines: &StatusLines) -> Result<(), Self::Error> {
        self.draw_lines(lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::display::Ssd1306;
    use embedded_hal_mock::eh1::i2c::Mock as I2cMock;

    /// Framebuffer-only panel: presenting is a no-op.
    struct Canvas(Ssd1306<I2cMock>);

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = platform::DisplayError;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.0.draw_iter(pixels)
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            self.0.size()
        }
    }

    impl Present for Canvas {}

    fn lit_rows(canvas: &Canvas) -> Vec<u32> {
        (0..64)
            .filter(|y| (0..128).any(|x| canvas.0.pixel(x, *y)))
            .collect()
    }

    fn lines(text: [&str; 4]) -> StatusLines {
        text.map(|t| {
            let mut line = platform::StatusLine::new();
            line.push_str(t).unwrap();
            line
        })
    }

    #[tokio::test]
    async fn four_lines_land_in_four_bands() {
        let mut display = TextDisplay::new(Canvas(Ssd1306::new(I2cMock::new(&[]))));
        display
            .render(&lines(["BALANCE A:B", "X X X - - ", "A", "B"]))
            .await
            .unwrap();

        let rows = lit_rows(display.target());
        for band in 0..4u32 {
            let top = band * 12;
            assert!(
                rows.iter().any(|y| (top..top + 10).contains(y)),
                "line {band} drew nothing"
            );
        }
        assert!(rows.iter().all(|y| *y < 46));
        display.into_inner().0.release().done();
    }

    #[tokio::test]
    async fn render_clears_previous_screen() {
        let mut display = TextDisplay::new(Canvas(Ssd1306::new(I2cMock::new(&[]))));
        display
            .render(&lines(["XXXXXXXXXXXXXXXXXXXXX"; 4]))
            .await
            .unwrap();
        display.render(&StatusLines::default()).await.unwrap();
        assert!(lit_rows(display.target()).is_empty());
        display.into_inner().0.release().done();
    }
}
