//! School bag lighting: ambient animations on a 32x8 WS2812 matrix driven by
//! the RP2040 PIO.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::Executor;
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_time::Delay;
use rand::{rngs::SmallRng, SeedableRng};
use school_bag_lighting::prelude::*;
use school_bag_lighting::ws2812::{PioWs2812, PioWs2812Program};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// ADC samples folded into the rng seed.
const NOISE_SAMPLES: usize = 16;

#[embassy_executor::task]
async fn lighting_task(ws2812: PioWs2812<'static, PIO0, 0, NUM_LEDS>, rng: SmallRng) {
    let mut stage = Stage::new(ws2812, Delay);
    stage.matrix.set_brightness(BRIGHTNESS);
    // all pixels off before the first animation
    stage.show().await;

    let mut sequencer = Sequencer::new(stage, rng);
    sequencer.run().await;
}

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[entry]
fn main() -> ! {
    info!("Start");
    let p = embassy_rp::init(Default::default());

    // seed from the noise on a floating analog input
    let seed = {
        let mut adc = Adc::new_blocking(p.ADC, adc::Config::default());
        let mut noise = adc::Channel::new_pin(p.PIN_26, Pull::None);
        (0..NOISE_SAMPLES).fold(0u64, |acc, _| {
            let sample = adc.blocking_read(&mut noise).unwrap_or_default();
            acc.rotate_left(4) ^ u64::from(sample)
        })
    };
    info!("seed: {:x}", seed);

    let ws2812 = {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(p.PIO0, Irqs);
        let program = PioWs2812Program::new(&mut common);
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program)
    };

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(lighting_task(ws2812, SmallRng::seed_from_u64(seed))));
    });
}
