//! Rainbow theater chase: every third LED along the strip lit, the wheel
//! turning underneath.
use embedded_hal_async::delay::DelayNs;

use crate::color::{self, HUE_TURN};
use crate::prelude::*;

const REPEATS: u32 = 10;
const PHASES: usize = 3;
/// One turn of the color wheel over all frames.
const HUE_STEP: u32 = HUE_TURN / 90;

pub async fn theater_chase_rainbow<P: Panel, D: DelayNs>(stage: &mut Stage<P, D>, wait: u32) {
    let mut first_pixel_hue = 0u32;
    for _ in 0..REPEATS {
        for phase in 0..PHASES {
            stage.matrix.clear();
            for c in (phase..NUM_LEDS).step_by(PHASES) {
                let hue = first_pixel_hue + c as u32 * HUE_TURN / NUM_LEDS as u32;
                // gamma is applied once, when the pixel is rendered
                let rgb = color::color_hsv(hue as u16);
                stage.matrix.set_led(c, color::pack(rgb));
            }
            stage.show().await;
            stage.pause(wait).await;
            first_pixel_hue += HUE_STEP;
        }
    }
}
