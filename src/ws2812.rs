//! WS2812 panel strings over the nRF PWM sequencer.
//!
//! The PWM runs at 16 MHz with a top of 20 counts, so each duty word is one
//! 1.25 µs bit slot. A `1` bit is high for 13 counts, a `0` bit for 7. The
//! sequencer plays one word per bit, then holds the line low long enough to
//! latch the string.
//!
//! Encoding is plain data and tested on the host; the driver itself only
//! builds with the `embedded` feature.

use crate::config::PANEL_LEDS;
use crate::display::Frame;

/// Duty word for a `1` bit (inverted polarity flag set).
const T1H: u16 = 0x8000 | 13;
/// Duty word for a `0` bit.
const T0H: u16 = 0x8000 | 7;
/// Line held low after the last bit.
const RES: u16 = 0x8000;

const BITS_PER_LED: usize = 24;

/// Duty words for one full string plus the trailing reset word.
pub const FRAME_WORDS: usize = PANEL_LEDS * BITS_PER_LED + 1;

/// Encode `frame` into `words`: GRB order, most significant bit first.
pub fn encode(frame: &Frame, words: &mut [u16; FRAME_WORDS]) {
    let bytes = frame.iter().flat_map(|led| led.grb());
    for (chunk, byte) in words.chunks_exact_mut(8).zip(bytes) {
        for (bit, word) in chunk.iter_mut().enumerate() {
            *word = if byte & (0x80 >> bit) != 0 { T1H } else { T0H };
        }
    }
    words[FRAME_WORDS - 1] = RES;
}

#[cfg(feature = "embedded")]
pub use driver::Ws2812Panels;

#[cfg(feature = "embedded")]
mod driver {
    use embassy_nrf::gpio::AnyPin;
    use embassy_nrf::peripherals::{PWM0, PWM1};
    use embassy_nrf::pwm::{
        Config, Prescaler, SequenceConfig, SequenceLoad, SequencePwm, SingleSequenceMode,
        SingleSequencer,
    };
    use embassy_time::Timer;

    use super::{encode, FRAME_WORDS};
    use crate::display::{Frame, LedBus, Panel};
    use crate::error::Error;

    /// 20 counts at 16 MHz: 1.25 µs per bit.
    const MAX_DUTY: u16 = 20;
    /// Low time after the frame, in bit slots (~1 ms).
    const LATCH_SLOTS: u32 = 799;
    /// Upper bound on one frame plus latch.
    const FRAME_MS: u64 = 2;

    /// Both panel strings, one PWM instance each.
    pub struct Ws2812Panels {
        left: SequencePwm<'static, PWM0>,
        right: SequencePwm<'static, PWM1>,
        /// Sequencer source; must stay in RAM while a frame is playing.
        words: [u16; FRAME_WORDS],
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.sequence_load = SequenceLoad::Common;
        config.prescaler = Prescaler::Div1;
        config.max_duty = MAX_DUTY;
        config
    }

    impl Ws2812Panels {
        pub fn new(
            pwm0: PWM0,
            left_din: AnyPin,
            pwm1: PWM1,
            right_din: AnyPin,
        ) -> Result<Self, Error> {
            let left = SequencePwm::new_1ch(pwm0, left_din, config()).map_err(|e| {
                error!("PWM0 setup failed: {}", e);
                Error::LedEmit
            })?;
            let right = SequencePwm::new_1ch(pwm1, right_din, config()).map_err(|e| {
                error!("PWM1 setup failed: {}", e);
                Error::LedEmit
            })?;
            Ok(Self {
                left,
                right,
                words: [0; FRAME_WORDS],
            })
        }
    }

    impl LedBus for Ws2812Panels {
        async fn emit(&mut self, panel: Panel, frame: &Frame) -> Result<(), Error> {
            encode(frame, &mut self.words);

            let mut seq_config = SequenceConfig::default();
            seq_config.end_delay = LATCH_SLOTS;

            // Each sequencer stops its PWM when dropped at the end of its arm.
            let started = match panel {
                Panel::Left => {
                    let seq = SingleSequencer::new(&mut self.left, &self.words, seq_config);
                    let started = seq.start(SingleSequenceMode::Times(1));
                    Timer::after_millis(FRAME_MS).await;
                    started
                }
                Panel::Right => {
                    let seq = SingleSequencer::new(&mut self.right, &self.words, seq_config);
                    let started = seq.start(SingleSequenceMode::Times(1));
                    Timer::after_millis(FRAME_MS).await;
                    started
                }
            };
            started.map_err(|e| {
                error!("{} panel frame failed: {}", panel, e);
                Error::LedEmit
            })
        }
    }
}
