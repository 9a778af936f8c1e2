//! A random invader walking a random distance left or right.
use embedded_hal_async::delay::DelayNs;
use rand::Rng;
use rand_core::RngCore;

use crate::prelude::*;

pub const STEP_DELAY_MS: u32 = 75;
const MAX_STEPS: u32 = 32;
const FRAME_STATES: u8 = 3;

/// Position and animation state kept between walks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Walker {
    pub position: i32,
    pub frame: u8,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    fn step(&mut self, direction: i32) {
        self.frame = (self.frame + 1) % FRAME_STATES;
        self.position = (self.position + direction).rem_euclid(MATRIX_WIDTH as i32);
    }
}

/// Parameters of a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Walk {
    pub species: Species,
    pub steps: u32,
    pub direction: i32,
}

impl Walk {
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let steps = rng.gen_range(0..MAX_STEPS);
        let direction = if rng.gen_range(0..1000) < 500 { -1 } else { 1 };
        let species = Species::ALL[rng.gen_range(0..1000usize) % Species::ALL.len()];
        Self {
            species,
            steps,
            direction,
        }
    }
}

pub async fn show_pacman<P: Panel, D: DelayNs, R: RngCore>(
    stage: &mut Stage<P, D>,
    walker: &mut Walker,
    rng: &mut R,
) {
    let walk = Walk::random(rng);
    debug!(
        "walk: {} steps, direction {}",
        walk.steps,
        walk.direction
    );
    self::walk(stage, walker, walk).await;
}

pub async fn walk<P: Panel, D: DelayNs>(stage: &mut Stage<P, D>, walker: &mut Walker, walk: Walk) {
    for _ in 0..walk.steps {
        walker.step(walk.direction);
        stage.matrix.clear();
        stage.matrix.draw_bitmap(
            walker.position,
            0,
            walk.species.frame(walker.frame as usize),
            walk.species.color(),
        );
        stage.show().await;
        stage.pause(STEP_DELAY_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::app::testing;

    fn walk_of(species: Species, steps: u32, direction: i32) -> Walk {
        Walk {
            species,
            steps,
            direction,
        }
    }

    #[tokio::test]
    async fn zero_steps_draws_nothing() {
        let mut stage = testing::stage();
        let mut walker = Walker {
            position: 5,
            frame: 2,
        };
        walk(&mut stage, &mut walker, walk_of(Species::Invader2, 0, 1)).await;
        assert!(stage.panel().frames.is_empty());
        assert!(stage.delay().pauses.is_empty());
        assert_eq!(
            walker,
            Walker {
                position: 5,
                frame: 2
            }
        );
    }

    #[tokio::test]
    async fn walks_right_and_wraps() {
        let mut stage = testing::stage();
        let mut walker = Walker {
            position: 30,
            frame: 1,
        };
        walk(&mut stage, &mut walker, walk_of(Species::Invader4, 5, 1)).await;
        assert_eq!(stage.panel().frames.len(), 5);
        assert_eq!(stage.delay().pauses, vec![STEP_DELAY_MS; 5]);
        assert_eq!(walker.position, 3);
        assert_eq!(walker.frame, (1 + 5) % 3);
    }

    #[tokio::test]
    async fn walking_left_stays_non_negative() {
        let mut stage = testing::stage();
        let mut walker = Walker::new();
        walk(&mut stage, &mut walker, walk_of(Species::Invader1, 3, -1)).await;
        assert_eq!(walker.position, 29);
        assert_eq!(walker.frame, 0);
        assert!(stage.panel().frames.iter().all(|f| testing::lit(f) > 0));
    }

    #[tokio::test]
    async fn draws_the_sprite_at_the_walker() {
        let mut stage = testing::stage();
        let mut walker = Walker::new();
        walk(&mut stage, &mut walker, walk_of(Species::Invader1, 1, 1)).await;

        // invader 1 frame 1, top row 0b00011000 at x = 1
        let mut expected = Matrix::new();
        expected.draw_bitmap(1, 0, Species::Invader1.frame(1), Species::Invader1.color());
        assert_eq!(stage.matrix.pixels(), expected.pixels());
        assert_eq!(stage.panel().frames[0], expected.render());
        assert_ne!(stage.matrix.get(4, 0), Ok(Rgb565::BLACK));
    }

    #[tokio::test]
    async fn state_carries_over_between_walks() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut stage = testing::stage();
        let mut walker = Walker::new();
        let mut expected = Walker::new();
        let mut flushes = 0;

        for _ in 0..20 {
            let plan = Walk::random(&mut rng.clone());
            show_pacman(&mut stage, &mut walker, &mut rng).await;

            assert!(plan.steps < 32);
            assert!(plan.direction == 1 || plan.direction == -1);
            expected.position =
                (expected.position + plan.steps as i32 * plan.direction).rem_euclid(32);
            expected.frame = ((expected.frame as u32 + plan.steps) % 3) as u8;
            flushes += plan.steps as usize;

            assert_eq!(walker, expected);
            assert!((0..32).contains(&walker.position));
        }
        assert_eq!(stage.panel().frames.len(), flushes);
    }
}
