//! WS2812 light bar over SPI.
//!
//! The strip is a 5×5 matrix wired as a serpentine: even rows run left to
//! right, odd rows right to left. Logical pixel `i` (row `i / 5`, column
//! `i % 5`) is translated to its position on the chain by
//! [`serpentine_index`].
//!
//! Each WS2812 bit becomes three SPI bits (`110` for one, `100` for zero) at
//! 2.5 MHz, giving a 1.2 µs bit period. Colours go out in GRB order. The
//! pipeline hands over channel bytes that are already bit-reversed, so each
//! byte is shifted out LSB-first here, which puts the original MSB on the
//! wire first.

use embedded_hal::spi::SpiBus;
use platform::config::BAR_PIXELS;
use platform::{LedStrip, RGB8};

/// Pixels per matrix row.
pub const ROW_PIXELS: usize = 5;

/// SPI bytes per colour byte (8 bits × 3 SPI bits).
const SPI_BYTES_PER_CHANNEL: usize = 3;

/// SPI bytes per pixel.
pub const SPI_BYTES_PER_PIXEL: usize = SPI_BYTES_PER_CHANNEL * 3;

/// Low SPI bytes appended to latch the frame (320 µs at 2.5 MHz, enough
/// for WS2812B parts that need > 280 µs).
pub const RESET_BYTES: usize = 100;

/// Encoded frame length.
pub const FRAME_BYTES: usize = BAR_PIXELS * SPI_BYTES_PER_PIXEL + RESET_BYTES;

const ONE: u32 = 0b110;
const ZERO: u32 = 0b100;

/// Chain position of logical pixel `index`.
#[allow(clippy::arithmetic_side_effects)] // col < ROW_PIXELS; row * ROW_PIXELS <= index
pub const fn serpentine_index(index: usize) -> usize {
    let row = index / ROW_PIXELS;
    let col = index % ROW_PIXELS;
    if row % 2 == 0 {
        index
    } else {
        row * ROW_PIXELS + (ROW_PIXELS - 1 - col)
    }
}

/// Encode one channel byte, LSB first, as 24 SPI bits (3 bytes, MSB first).
#[allow(clippy::arithmetic_side_effects)] // 8 iterations, 24 bits of a u32
pub const fn encode_channel(byte: u8) -> [u8; SPI_BYTES_PER_CHANNEL] {
    let mut bits: u32 = 0;
    let mut i = 0;
    while i < 8 {
        let symbol = if (byte >> i) & 1 == 1 { ONE } else { ZERO };
        bits = (bits << 3) | symbol;
        i += 1;
    }
    let [_, a, b, c] = bits.to_be_bytes();
    [a, b, c]
}

/// Encode one pixel in GRB order.
pub fn encode_pixel(color: RGB8) -> [u8; SPI_BYTES_PER_PIXEL] {
    let mut out = [0u8; SPI_BYTES_PER_PIXEL];
    for (chunk, channel) in out
        .chunks_exact_mut(SPI_BYTES_PER_CHANNEL)
        .zip([color.g, color.r, color.b])
    {
        chunk.copy_from_slice(&encode_channel(channel));
    }
    out
}

/// WS2812 chain driven from the MOSI line of an SPI bus.
pub struct SpiLedStrip<S> {
    spi: S,
    staged: [RGB8; BAR_PIXELS],
    frame: [u8; FRAME_BYTES],
}

impl<S: SpiBus> SpiLedStrip<S> {
    /// Take ownership of the bus. Every pixel starts dark.
    pub fn new(spi: S) -> Self {
        Self {
            spi,
            staged: [RGB8::default(); BAR_PIXELS],
            frame: [0; FRAME_BYTES],
        }
    }

    /// Borrow the bus.
    pub fn bus(&self) -> &S {
        &self.spi
    }

    /// The encoded bytes of the last flush (reset tail included).
    pub fn frame(&self) -> &[u8; FRAME_BYTES] {
        &self.frame
    }

    fn encode(&mut self) {
        for (position, chunk) in self
            .frame
            .chunks_exact_mut(SPI_BYTES_PER_PIXEL)
            .take(BAR_PIXELS)
            .enumerate()
        {
            // Chain position `position` shows the logical pixel mapped onto it.
            let logical = serpentine_index(position);
            let color = self.staged.get(logical).copied().unwrap_or_default();
            chunk.copy_from_slice(&encode_pixel(color));
        }
    }
}

impl<S: SpiBus> LedStrip for SpiLedStrip<S> {
    type Error = S::Error;

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.encode();
        self.spi.write(&self.frame)?;
        self.spi.flush()
    }
}
