use embedded_hal_async::delay::DelayNs;
use rand::{rngs::SmallRng, SeedableRng};
use school_bag_lighting::app::walker::{Walk, Walker};
use school_bag_lighting::prelude::*;

#[derive(Default)]
struct Recorder {
    frames: usize,
}

impl Panel for Recorder {
    async fn show(&mut self, _leds: &[RGB8; NUM_LEDS]) {
        self.frames += 1;
    }
}

#[derive(Default)]
struct Clock {
    total_ms: u64,
}

impl DelayNs for Clock {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
    }
}

fn expected_walks(seed: u64, cycles: usize) -> (usize, Walker) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut steps = 0;
    let mut walker = Walker::new();
    for _ in 0..cycles * 10 {
        let walk = Walk::random(&mut rng);
        steps += walk.steps as usize;
        walker.position = (walker.position + walk.steps as i32 * walk.direction).rem_euclid(32);
        walker.frame = ((walker.frame as u32 + walk.steps) % 3) as u8;
    }
    (steps, walker)
}

#[tokio::test]
async fn one_cycle_flushes_every_animation() {
    let seed = 0x5c4001;
    let mut stage = Stage::new(Recorder::default(), Clock::default());
    stage.matrix.set_brightness(BRIGHTNESS);
    let mut sequencer = Sequencer::new(stage, SmallRng::seed_from_u64(seed));

    sequencer.run_cycle().await;

    let (steps, walker) = expected_walks(seed, 1);
    let frames = sequencer.stage().panel().frames;
    assert_eq!(frames, 30 + 204 + steps + 256);
    // ten walks of at most 31 steps each
    assert!((490..=800).contains(&frames));
    assert_eq!(sequencer.walker(), walker);
    assert_eq!(sequencer.cycles(), 1);

    let total_ms = 30 * 50 + 204 * 10 + steps as u64 * 75 + 256 * 50;
    assert_eq!(sequencer.stage().delay().total_ms, total_ms);
}

#[tokio::test]
async fn walker_state_survives_cycles() {
    let seed = 7;
    let stage = Stage::new(Recorder::default(), Clock::default());
    let mut sequencer = Sequencer::new(stage, SmallRng::seed_from_u64(seed));

    for _ in 0..3 {
        sequencer.run_cycle().await;
    }

    let (steps, walker) = expected_walks(seed, 3);
    assert_eq!(sequencer.walker(), walker);
    assert_eq!(
        sequencer.stage().panel().frames,
        3 * (30 + 204 + 256) + steps
    );
}
