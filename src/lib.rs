#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod app;
pub mod color;
pub mod matrix;
pub mod sequencer;
pub mod sprites;
#[cfg(feature = "rp2040")]
pub mod ws2812;

pub use embedded_graphics::pixelcolor::Rgb565;
pub use smart_leds::RGB8;

pub mod prelude {
    pub use super::{
        app::{self, Panel, Stage},
        color,
        matrix::{led_addr, Matrix, BRIGHTNESS, MATRIX_HEIGHT, MATRIX_WIDTH, NUM_LEDS},
        sequencer::Sequencer,
        sprites::{Species, SpriteFrame},
        Rgb565, RGB8,
    };
}
