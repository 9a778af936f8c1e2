use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use smart_leds::RGB8;

/// Hue value covering one full turn of the color wheel.
pub const HUE_TURN: u32 = 65536;

/// Input a hue 0 to 65535 to get a fully saturated color at full value.
/// The colours are a transition r - y - g - c - b - m - back to r.
pub fn color_hsv(hue: u16) -> RGB8 {
    // remap so that every one of the six segments is exactly 255 steps
    let hue = ((hue as u32 * 1530 + 32768) / HUE_TURN) as u16;
    let (r, g, b) = if hue < 510 {
        if hue < 255 {
            (255, hue, 0)
        } else {
            (510 - hue, 255, 0)
        }
    } else if hue < 1020 {
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < 1530 {
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, 1530 - hue)
        }
    } else {
        (255, 0, 0)
    };
    RGB8::new(r as u8, g as u8, b as u8)
}

/// Perceptual gamma correction (gamma 2.6) of every channel.
pub fn gamma(c: RGB8) -> RGB8 {
    RGB8::new(
        GAMMA8[c.r as usize],
        GAMMA8[c.g as usize],
        GAMMA8[c.b as usize],
    )
}

/// Truncate an 8 bit per channel color to the 5-6-5 layout of the matrix.
pub fn pack(c: RGB8) -> Rgb565 {
    Rgb565::new(c.r >> 3, c.g >> 2, c.b >> 3)
}

fn widen(c: Rgb565) -> RGB8 {
    let (r, g, b) = (c.r(), c.g(), c.b());
    RGB8::new((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
}

/// Widen a 5-6-5 pixel to the 8 bit strip color. 16 bit colors pass the
/// gamma table on the way out, like every pixel drawn on a NeoPixel matrix.
pub fn expand(c: Rgb565) -> RGB8 {
    gamma(widen(c))
}

/// Gamma corrected wheel color in the native pixel format.
pub fn hsv_color(hue: u16) -> Rgb565 {
    pack(gamma(color_hsv(hue)))
}

const GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5, 5, 5,
    5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14,
    14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27,
    27, 28, 29, 29, 30, 31, 32, 32, 33, 34, 35, 35, 36, 37, 38, 39, 39, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 50, 51, 52, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 66, 67, 68, 69, 70, 72,
    73, 74, 75, 77, 78, 79, 81, 82, 83, 85, 86, 87, 89, 90, 92, 93, 95, 96, 98, 99, 101, 102, 104,
    105, 107, 109, 110, 112, 114, 115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137,
    138, 140, 142, 144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213, 215, 218, 220,
    223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];
