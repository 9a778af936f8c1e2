use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{ascii::FONT_4X6, MonoTextStyle},
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    text::{Baseline, Text},
};
use smart_leds::{brightness, RGB8};

use crate::{color, sprites::SpriteFrame};

pub const MATRIX_WIDTH: usize = 32;
pub const MATRIX_HEIGHT: usize = 8;
pub const NUM_LEDS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Global brightness, about 1/5 of full scale.
pub const BRIGHTNESS: u8 = 50;

/// Row-major pixel -> position on the strip. The strip starts top left and
/// runs down the columns in a zig-zag.
const MATRIX_MAP: [u16; NUM_LEDS] = build_matrix_map();

const fn build_matrix_map() -> [u16; NUM_LEDS] {
    let mut map = [0u16; NUM_LEDS];
    let mut y = 0;
    while y < MATRIX_HEIGHT {
        let mut x = 0;
        while x < MATRIX_WIDTH {
            let row = if x % 2 == 0 { y } else { MATRIX_HEIGHT - 1 - y };
            map[x + y * MATRIX_WIDTH] = (x * MATRIX_HEIGHT + row) as u16;
            x += 1;
        }
        y += 1;
    }
    map
}

/// Position on the strip -> row-major pixel.
const STRIP_MAP: [u16; NUM_LEDS] = build_strip_map();

const fn build_strip_map() -> [u16; NUM_LEDS] {
    let mut map = [0u16; NUM_LEDS];
    let mut addr = 0;
    while addr < NUM_LEDS {
        map[MATRIX_MAP[addr] as usize] = addr as u16;
        addr += 1;
    }
    map
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    OutOfBounds,
}

fn pixel_addr(x: i32, y: i32) -> Result<usize, Error> {
    if x < 0 || y < 0 || x as usize >= MATRIX_WIDTH || y as usize >= MATRIX_HEIGHT {
        return Err(Error::OutOfBounds);
    }
    Ok(x as usize + y as usize * MATRIX_WIDTH)
}

/// Position of pixel (x, y) on the LED strip.
pub fn led_addr(x: i32, y: i32) -> Result<usize, Error> {
    let addr = pixel_addr(x, y)?;
    MATRIX_MAP
        .get(addr)
        .map(|led| *led as usize)
        .ok_or(Error::OutOfBounds)
}

/// Pixel buffer of the LED matrix. Nothing leaves the buffer until it is
/// rendered and handed to a [`crate::app::Panel`].
#[derive(Clone)]
pub struct Matrix {
    pixels: [Rgb565; NUM_LEDS],
    brightness: u8,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Matrix {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb565::BLACK; NUM_LEDS],
            brightness: 255,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb565::BLACK);
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb565) -> Result<usize, Error> {
        let addr = pixel_addr(x, y)?;
        let pixel = self.pixels.get_mut(addr).ok_or(Error::OutOfBounds)?;
        *pixel = color;
        Ok(addr)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Rgb565, Error> {
        let addr = pixel_addr(x, y)?;
        self.pixels.get(addr).copied().ok_or(Error::OutOfBounds)
    }

    /// Clipped write, pixels outside the matrix are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        let _ = self.set(x, y, color);
    }

    /// Write by position along the LED strip, ignoring the matrix geometry.
    pub fn set_led(&mut self, led: usize, color: Rgb565) {
        if let Some(addr) = STRIP_MAP.get(led) {
            self.pixels[*addr as usize] = color;
        }
    }

    /// Blit the set bits of `frame` in `color`. Clear bits are transparent.
    /// There is no wraparound, callers wrap `x` themselves.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, frame: &SpriteFrame, color: Rgb565) {
        for (dy, bits) in frame.iter().enumerate() {
            for dx in 0..8 {
                if bits & (0x80 >> dx) != 0 {
                    self.set_pixel(x + dx, y + dy as i32, color);
                }
            }
        }
    }

    /// Print `text` with the small 4x6 font. `y` is the baseline.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb565) {
        let style = MonoTextStyle::new(&FONT_4X6, color);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic).draw(self);
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn pixels(&self) -> &[Rgb565; NUM_LEDS] {
        &self.pixels
    }

    /// Strip-ordered 24 bit colors with the global brightness applied.
    pub fn render(&self) -> [RGB8; NUM_LEDS] {
        let mut leds = [RGB8::default(); NUM_LEDS];
        let colors = brightness(
            self.pixels.iter().map(|c| color::expand(*c)),
            self.brightness,
        );
        for (led, rgb) in MATRIX_MAP.iter().zip(colors) {
            leds[*led as usize] = rgb;
        }
        leds
    }
}

impl OriginDimensions for Matrix {
    fn size(&self) -> Size {
        Size::new(MATRIX_WIDTH as u32, MATRIX_HEIGHT as u32)
    }
}

impl DrawTarget for Matrix {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            self.set_pixel(p.x, p.y, color);
        }
        Ok(())
    }
}
