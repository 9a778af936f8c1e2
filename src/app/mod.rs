use embedded_hal_async::delay::DelayNs;

use crate::prelude::*;

pub mod banner;
pub mod marquee;
pub mod rainbow_walker;
pub mod walker;

/// The physical display. Takes one full frame in strip order.
#[allow(async_fn_in_trait)]
pub trait Panel {
    async fn show(&mut self, leds: &[RGB8; NUM_LEDS]);
}

/// Everything an animation draws on: the pixel buffer, the panel it is
/// flushed to and the clock that paces the frames.
pub struct Stage<P, D> {
    pub matrix: Matrix,
    panel: P,
    delay: D,
}

impl<P: Panel, D: DelayNs> Stage<P, D> {
    pub fn new(panel: P, delay: D) -> Self {
        Self {
            matrix: Matrix::new(),
            panel,
            delay,
        }
    }

    /// Push the buffered frame to the panel.
    pub async fn show(&mut self) {
        let leds = self.matrix.render();
        self.panel.show(&leds).await;
    }

    pub async fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Keeps every frame it was shown.
    #[derive(Default)]
    pub struct Recorder {
        pub frames: Vec<[RGB8; NUM_LEDS]>,
    }

    impl Panel for Recorder {
        async fn show(&mut self, leds: &[RGB8; NUM_LEDS]) {
            self.frames.push(*leds);
        }
    }

    /// Returns immediately and remembers how long it was asked to wait.
    #[derive(Default)]
    pub struct Clock {
        pub pauses: Vec<u32>,
    }

    impl DelayNs for Clock {
        async fn delay_ns(&mut self, ns: u32) {
            self.pauses.push(ns / 1_000_000);
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.pauses.push(ms);
        }
    }

    pub fn stage() -> Stage<Recorder, Clock> {
        Stage::new(Recorder::default(), Clock::default())
    }

    pub fn lit(leds: &[RGB8; NUM_LEDS]) -> usize {
        leds.iter().filter(|c| **c != RGB8::default()).count()
    }
}
