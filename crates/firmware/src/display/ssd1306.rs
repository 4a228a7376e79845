//! SSD1306 I2C OLED driver (128×64, monochrome)
//!
//! # Wiring (STM32H743ZI)
//!
//! | Signal | STM32 pin      |
//! |--------|----------------|
//! | SCL    | PB8 (I2C1_SCL) |
//! | SDA    | PB9 (I2C1_SDA) |
//!
//! # Memory layout
//!
//! The controller's RAM is organised in 8 pages of 128 columns; each byte is a
//! vertical strip of 8 pixels with bit 0 at the top. The framebuffer mirrors
//! that layout exactly so a flush is a straight copy:
//!
//! ```text
//! byte = x + (y / 8) * 128      bit = y % 8      1 = lit
//! ```

// Pixel coordinates from embedded-graphics are i32; after bounds checks they
// are always non-negative and below 128/64, so the casts and index maths
// cannot wrap.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::i2c::I2c;
use platform::DisplayError;

use super::text::Present;
use super::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// 7-bit bus address (SA0 low).
pub const I2C_ADDRESS: u8 = 0x3C;

/// Columns per page.
const PAGE_WIDTH: usize = DISPLAY_WIDTH as usize;

/// Number of 8-pixel pages.
const PAGES: usize = DISPLAY_HEIGHT as usize / 8;

/// 1bpp framebuffer size (128 × 64 / 8).
pub const FRAMEBUFFER_SIZE: usize = PAGE_WIDTH * PAGES;

/// Control byte: a stream of command bytes follows.
const CONTROL_COMMANDS: u8 = 0x00;

/// Control byte: a stream of GDDRAM data bytes follows.
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 command codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Command {
    /// Display off (sleep)
    DisplayOff = 0xAE,
    /// Display on
    DisplayOn = 0xAF,
    /// Clock divide ratio / oscillator frequency, 1 data byte.
    ClockDiv = 0xD5,
    /// Multiplex ratio, 1 data byte (rows − 1).
    Multiplex = 0xA8,
    /// Vertical display offset, 1 data byte.
    DisplayOffset = 0xD3,
    /// RAM start line 0.
    StartLine = 0x40,
    /// Charge pump setting, 1 data byte.
    ChargePump = 0x8D,
    /// Memory addressing mode, 1 data byte.
    AddressingMode = 0x20,
    /// Column address 127 mapped to SEG0.
    SegmentRemap = 0xA1,
    /// Scan COM[N−1] → COM0.
    ComScanDec = 0xC8,
    /// COM pins hardware configuration, 1 data byte.
    ComPins = 0xDA,
    /// Contrast, 1 data byte.
    Contrast = 0x81,
    /// Pre-charge period, 1 data byte.
    PreCharge = 0xD9,
    /// VCOMH deselect level, 1 data byte.
    VcomDeselect = 0xDB,
    /// Output follows RAM content.
    ResumeRam = 0xA4,
    /// Normal (non-inverted) display.
    Normal = 0xA6,
    /// Column address window, 2 data bytes.
    ColumnAddress = 0x21,
    /// Page address window, 2 data bytes.
    PageAddress = 0x22,
}

/// Power-up sequence for a 128×64 panel with the internal charge pump.
const INIT_SEQUENCE: [u8; 25] = [
    Command::DisplayOff as u8,
    Command::ClockDiv as u8,
    0x80,
    Command::Multiplex as u8,
    0x3F,
    Command::DisplayOffset as u8,
    0x00,
    Command::StartLine as u8,
    Command::ChargePump as u8,
    0x14,
    Command::AddressingMode as u8,
    0x00, // horizontal
    Command::SegmentRemap as u8,
    Command::ComScanDec as u8,
    Command::ComPins as u8,
    0x12,
    Command::Contrast as u8,
    0xCF,
    Command::PreCharge as u8,
    0xF1,
    Command::VcomDeselect as u8,
    0x40,
    Command::ResumeRam as u8,
    Command::Normal as u8,
    Command::DisplayOn as u8,
];

/// Longest command stream sent in one transfer.
const MAX_COMMANDS: usize = INIT_SEQUENCE.len();

/// SSD1306 driver over a blocking I2C bus.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    framebuffer: [u8; FRAMEBUFFER_SIZE],
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a driver at the default address. The framebuffer starts dark.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, I2C_ADDRESS)
    }

    /// Create a driver at `address` (0x3D when SA0 is strapped high).
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            framebuffer: [0; FRAMEBUFFER_SIZE],
        }
    }

    /// Send up to [`MAX_COMMANDS`] command bytes in one transfer.
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        let mut buf = [CONTROL_COMMANDS; MAX_COMMANDS + 1];
        let len = commands.len().min(MAX_COMMANDS);
        for (dst, src) in buf.iter_mut().skip(1).zip(commands) {
            *dst = *src;
        }
        self.i2c
            .write(self.address, buf.get(..=len).unwrap_or(&[]))
            .map_err(|_| DisplayError::Communication)
    }

    /// Configure the controller and switch the panel on.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.send_commands(&INIT_SEQUENCE)
    }

    /// Push the framebuffer to GDDRAM, one page per transfer.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        self.send_commands(&[
            Command::ColumnAddress as u8,
            0,
            (PAGE_WIDTH - 1) as u8,
            Command::PageAddress as u8,
            0,
            (PAGES - 1) as u8,
        ])?;
        let mut buf = [CONTROL_DATA; PAGE_WIDTH + 1];
        for page in self.framebuffer.chunks_exact(PAGE_WIDTH) {
            for (dst, src) in buf.iter_mut().skip(1).zip(page) {
                *dst = *src;
            }
            self.i2c
                .write(self.address, &buf)
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }

    /// The current framebuffer contents.
    pub fn framebuffer(&self) -> &[u8; FRAMEBUFFER_SIZE] {
        &self.framebuffer
    }

    /// Whether the pixel at `(x, y)` is lit in the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return false;
        }
        let index = x as usize + (y as usize / 8) * PAGE_WIDTH;
        self.framebuffer
            .get(index)
            .is_some_and(|byte| byte & (1 << (y % 8)) != 0)
    }

    /// Release the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = DisplayError;

    /// Write pixels into the framebuffer; off-screen pixels are ignored.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= DISPLAY_WIDTH as i32
                || point.y >= DISPLAY_HEIGHT as i32
            {
                continue;
            }
            let x = point.x as usize;
            let y = point.y as usize;
            let mask = 1u8 << (y % 8);
            if let Some(byte) = self.framebuffer.get_mut(x + (y / 8) * PAGE_WIDTH) {
                match color {
                    BinaryColor::On => *byte |= mask,
                    BinaryColor::Off => *byte &= !mask,
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.framebuffer.fill(fill);
        Ok(())
    }
}

impl<I2C: I2c> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl<I2C: I2c> Present for Ssd1306<I2C> {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn with_control(control: u8, bytes: &[u8]) -> Vec<u8> {
        let mut out = vec![control];
        out.extend_from_slice(bytes);
        out
    }

    #[test]
    fn init_streams_command_sequence() {
        let expected = with_control(CONTROL_COMMANDS, &INIT_SEQUENCE);
        let mut display = Ssd1306::new(I2cMock::new(&[I2cTransaction::write(0x3C, expected)]));
        display.init().unwrap();
        display.release().done();
    }

    #[test]
    fn init_sequence_ends_with_display_on() {
        assert_eq!(INIT_SEQUENCE[0], 0xAE);
        assert_eq!(INIT_SEQUENCE[INIT_SEQUENCE.len() - 1], 0xAF);
    }

    #[test]
    fn pixel_layout_is_page_major_lsb_top() {
        let mut display = Ssd1306::new(I2cMock::new(&[]));
        Pixel(Point::new(3, 0), BinaryColor::On).draw(&mut display).unwrap();
        Pixel(Point::new(3, 9), BinaryColor::On).draw(&mut display).unwrap();
        assert_eq!(display.framebuffer()[3], 0b0000_0001);
        assert_eq!(display.framebuffer()[128 + 3], 0b0000_0010);
        assert!(display.pixel(3, 9));
        assert!(!display.pixel(3, 8));
        display.release().done();
    }

    #[test]
    fn out_of_bounds_pixels_ignored() {
        let mut display = Ssd1306::new(I2cMock::new(&[]));
        Pixel(Point::new(-1, 0), BinaryColor::On).draw(&mut display).unwrap();
        Pixel(Point::new(128, 0), BinaryColor::On).draw(&mut display).unwrap();
        Pixel(Point::new(0, 64), BinaryColor::On).draw(&mut display).unwrap();
        assert!(display.framebuffer().iter().all(|b| *b == 0));
        display.release().done();
    }

    #[test]
    fn flush_sets_window_then_writes_eight_pages() {
        let mut transactions = vec![I2cTransaction::write(
            0x3C,
            with_control(CONTROL_COMMANDS, &[0x21, 0, 127, 0x22, 0, 7]),
        )];
        for _ in 0..PAGES {
            transactions.push(I2cTransaction::write(
                0x3C,
                with_control(CONTROL_DATA, &[0xFF; PAGE_WIDTH]),
            ));
        }
        let mut display = Ssd1306::new(I2cMock::new(&transactions));
        display.clear(BinaryColor::On).unwrap();
        display.flush().unwrap();
        display.release().done();
    }

    #[test]
    fn bus_error_maps_to_communication() {
        use embedded_hal::i2c::ErrorKind;
        let mut display = Ssd1306::new(I2cMock::new(&[I2cTransaction::write(
            0x3C,
            with_control(CONTROL_COMMANDS, &INIT_SEQUENCE),
        )
        .with_error(ErrorKind::Other)]));
        assert_eq!(display.init(), Err(DisplayError::Communication));
        display.release().done();
    }
}
