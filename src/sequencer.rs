use embedded_hal_async::delay::DelayNs;
use rand_core::RngCore;

use crate::app::{
    banner::show_text,
    marquee::theater_chase_rainbow,
    rainbow_walker::rainbow_pacman,
    walker::{show_pacman, Walker},
    Panel, Stage,
};

pub const MARQUEE_WAIT_MS: u32 = 50;
pub const TEXT_WAIT_MS: u32 = 50;
pub const RAINBOW_WAIT_MS: u32 = 50;
pub const WALKS_PER_CYCLE: usize = 10;

/// Runs the animations in a fixed order, forever.
pub struct Sequencer<P, D, R> {
    stage: Stage<P, D>,
    walker: Walker,
    rng: R,
    cycles: u32,
}

impl<P: Panel, D: DelayNs, R: RngCore> Sequencer<P, D, R> {
    pub fn new(stage: Stage<P, D>, rng: R) -> Self {
        Self {
            stage,
            walker: Walker::new(),
            rng,
            cycles: 0,
        }
    }

    pub async fn run_cycle(&mut self) {
        info!("cycle {}", self.cycles);
        theater_chase_rainbow(&mut self.stage, MARQUEE_WAIT_MS).await;
        show_text(&mut self.stage, TEXT_WAIT_MS).await;
        for _ in 0..WALKS_PER_CYCLE {
            show_pacman(&mut self.stage, &mut self.walker, &mut self.rng).await;
        }
        trace!("walker at {}", self.walker.position);
        rainbow_pacman(&mut self.stage, RAINBOW_WAIT_MS).await;
        self.cycles = self.cycles.wrapping_add(1);
    }

    pub async fn run(&mut self) {
        loop {
            self.run_cycle().await;
        }
    }

    pub fn stage(&self) -> &Stage<P, D> {
        &self.stage
    }

    pub fn walker(&self) -> Walker {
        self.walker
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}
