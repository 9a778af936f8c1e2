//! Three invaders side by side, each cycling through the rainbow.
use embedded_hal_async::delay::DelayNs;

use crate::color;
use crate::prelude::*;

const HUE_STEP: usize = 256;

const LINEUP: [(Species, i32, u16); 3] = [
    (Species::Invader1, 2, 0),
    (Species::Invader2, 12, 20000),
    (Species::Invader3, 22, 40000),
];

/// Sprite frame for a given hue, flipping every 2048 hue steps.
pub fn subsprite(hue: u16) -> usize {
    ((hue >> 11) & 1) as usize
}

pub async fn rainbow_pacman<P: Panel, D: DelayNs>(stage: &mut Stage<P, D>, wait: u32) {
    for hue in (0..=u16::MAX).step_by(HUE_STEP) {
        stage.matrix.clear();
        let frame = subsprite(hue);
        for (species, x, offset) in LINEUP {
            let color = color::hsv_color(hue.wrapping_add(offset));
            stage.matrix.draw_bitmap(x, 0, species.frame(frame), color);
        }
        stage.show().await;
        stage.pause(wait).await;
    }
}
