//! Space invader bitmaps, one byte per row with the MSB as the leftmost pixel.
use embedded_graphics::pixelcolor::Rgb565;
use smart_leds::RGB8;

use crate::color;

pub type SpriteFrame = [u8; 8];

pub const SPRITE_SIZE: i32 = 8;

static INVADER1: [SpriteFrame; 2] = [
    [
        0b00011000, 0b00111100, 0b01111110, 0b11011011, 0b11111111, 0b00100100, 0b01011010,
        0b10100101,
    ],
    [
        0b00011000, 0b00111100, 0b01111110, 0b11011011, 0b11111111, 0b00100100, 0b01011010,
        0b01000010,
    ],
];

static INVADER2: [SpriteFrame; 2] = [
    [
        0b00000000, 0b00111100, 0b01111110, 0b11011011, 0b11011011, 0b01111110, 0b00100100,
        0b11000011,
    ],
    [
        0b00111100, 0b01111110, 0b11011011, 0b11011011, 0b01111110, 0b00100100, 0b00100100,
        0b00100100,
    ],
];

static INVADER3: [SpriteFrame; 2] = [
    [
        0b00100100, 0b00100100, 0b01111110, 0b11011011, 0b11111111, 0b11111111, 0b10100101,
        0b00100100,
    ],
    [
        0b00100100, 0b10100101, 0b11111111, 0b11011011, 0b11111111, 0b01111110, 0b00100100,
        0b01000010,
    ],
];

static INVADER4: [SpriteFrame; 4] = [
    [
        0b00111100, 0b01111110, 0b00110011, 0b01111110, 0b00111100, 0b00000000, 0b00001000,
        0b00000000,
    ],
    [
        0b00111100, 0b01111110, 0b10011001, 0b01111110, 0b00111100, 0b00000000, 0b00001000,
        0b00001000,
    ],
    [
        0b00111100, 0b01111110, 0b11001100, 0b01111110, 0b00111100, 0b00000000, 0b00000000,
        0b00001000,
    ],
    [
        0b00111100, 0b01111110, 0b01100110, 0b01111110, 0b00111100, 0b00000000, 0b00000000,
        0b00000000,
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Species {
    Invader1,
    Invader2,
    Invader3,
    Invader4,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Invader1,
        Species::Invader2,
        Species::Invader3,
        Species::Invader4,
    ];

    pub fn frames(self) -> &'static [SpriteFrame] {
        match self {
            Species::Invader1 => &INVADER1,
            Species::Invader2 => &INVADER2,
            Species::Invader3 => &INVADER3,
            Species::Invader4 => &INVADER4,
        }
    }

    /// Animation frame for an arbitrary counter, wrapped to the frames this species has.
    pub fn frame(self, index: usize) -> &'static SpriteFrame {
        let frames = self.frames();
        &frames[index % frames.len()]
    }

    pub fn color(self) -> Rgb565 {
        let rgb = match self {
            Species::Invader1 => RGB8::new(127, 0, 0),
            Species::Invader2 => RGB8::new(127, 127, 0),
            Species::Invader3 => RGB8::new(127, 127, 127),
            Species::Invader4 => RGB8::new(0, 127, 0),
        };
        color::pack(rgb)
    }
}
