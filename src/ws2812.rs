//! [ws2812](https://cdn-shop.adafruit.com/datasheets/WS2812B.pdf) driver on an RP2040 PIO state machine.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::dma::{AnyChannel, Channel};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_rp::{into_ref, Peripheral, PeripheralRef};
use embassy_time::Timer;
use fixed::types::U24F8;
use smart_leds::RGB8;

use crate::app::Panel;
use crate::matrix::NUM_LEDS;

/// PIO cycles per bit: start (2) + data (5) + stop (3).
const CYCLES_PER_BIT: u32 = 10;

/// This struct represents a ws2812 program loaded into pio instruction memory.
pub struct PioWs2812Program<'a, PIO: Instance> {
    prg: LoadedProgram<'a, PIO>,
}

impl<'a, PIO: Instance> PioWs2812Program<'a, PIO> {
    /// Load the ws2812 program into the given pio
    pub fn new(common: &mut Common<'a, PIO>) -> Self {
        let prg = pio_proc::pio_asm!(
            r#"
                    .side_set 1
                    set pindirs, 1          side 0
                    .wrap_target
                    bitloop:
                        out x, 1            side 0 [2]
                        jmp !x do_zero      side 1 [1]
                    do_one:
                        jmp bitloop         side 1 [4]
                    do_zero:
                        nop                 side 0 [4]
                    .wrap
                "#
        );
        let prg = common.load_program(&prg.program);
        Self { prg }
    }
}

/// Pio backed ws2812 driver
/// Const N is the number of ws2812 leds attached to this pin
pub struct PioWs2812<'d, P: Instance, const S: usize, const N: usize> {
    dma: PeripheralRef<'d, AnyChannel>,
    sm: StateMachine<'d, P, S>,
}

impl<'d, P: Instance, const S: usize, const N: usize> PioWs2812<'d, P, S, N> {
    /// Configure a pio state machine to use the loaded ws2812 program.
    pub fn new(
        pio: &mut Common<'d, P>,
        mut sm: StateMachine<'d, P, S>,
        dma: impl Peripheral<P = impl Channel> + 'd,
        pin: impl PioPin,
        program: &PioWs2812Program<'d, P>,
    ) -> Self {
        into_ref!(dma);

        let mut cfg = Config::default();

        // Pin config
        let out_pin = pio.make_pio_pin(pin);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program.prg, &[&out_pin]);

        // Clock config, measured in kHz to avoid overflows
        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(800);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        // FIFO config
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };
        sm.set_config(&cfg);
        sm.set_enable(true);

        Self {
            dma: dma.map_into(),
            sm,
        }
    }

    pub async fn write(&mut self, colors: &[RGB8; N]) {
        // GRB, top aligned for the left shifting OSR
        let mut words = [0u32; N];
        for (word, c) in words.iter_mut().zip(colors) {
            *word = (u32::from(c.g) << 24) | (u32::from(c.r) << 16) | (u32::from(c.b) << 8);
        }

        self.sm.tx().dma_push(self.dma.reborrow(), &words).await;

        // latch
        Timer::after_micros(55).await;
    }
}

impl<'d, P: Instance, const S: usize> Panel for PioWs2812<'d, P, S, NUM_LEDS> {
    async fn show(&mut self, leds: &[RGB8; NUM_LEDS]) {
        self.write(leds).await;
    }
}
