//! Warning text fading out, alternating yellow and white.
use embedded_hal_async::delay::DelayNs;

use crate::color;
use crate::prelude::*;

pub const MESSAGE: &str = "LET OP";

const REPEATS: u8 = 4;
const FADE_STEP: usize = 5;
const FADE_DELAY_MS: u32 = 10;
const CURSOR: (i32, i32) = (6, 5);

fn text_color(repeat: u8, i: u8) -> Rgb565 {
    if repeat & 1 == 1 {
        color::pack(RGB8::new(i, i, i))
    } else {
        color::pack(RGB8::new(i, i, 0))
    }
}

/// `_wait` is not used, the fade always runs at a fixed 10 ms per step.
pub async fn show_text<P: Panel, D: DelayNs>(stage: &mut Stage<P, D>, _wait: u32) {
    stage.matrix.clear();
    for repeat in 0..REPEATS {
        for i in (1..=255u8).rev().step_by(FADE_STEP) {
            stage
                .matrix
                .draw_text(CURSOR.0, CURSOR.1, MESSAGE, text_color(repeat, i));
            stage.show().await;
            stage.pause(FADE_DELAY_MS).await;
        }
    }
}
