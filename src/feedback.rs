//! Buzzer + lamp cues.
//!
//! One digital output drives both the buzzer and the lamp. Each cue is a
//! fixed list of pulses played to completion; nothing can cut a cue short.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::error::Error;

/// Match events that get an audible/visual cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    MatchStart,
    PointAccepted,
    SideSwapped,
    MatchEnded,
}

/// Output on for `on_ms`, then off for `off_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub on_ms: u32,
    pub off_ms: u32,
}

const fn pulse(on_ms: u32, off_ms: u32) -> Pulse {
    Pulse { on_ms, off_ms }
}

const MATCH_START: &[Pulse] = &[pulse(150, 100), pulse(150, 100), pulse(400, 0)];
const POINT_ACCEPTED: &[Pulse] = &[pulse(80, 20)];
const SIDE_SWAPPED: &[Pulse] = &[pulse(250, 150), pulse(250, 150), pulse(250, 150)];
const MATCH_ENDED: &[Pulse] = &[pulse(1000, 200), pulse(200, 200), pulse(1000, 0)];

impl Cue {
    pub const fn pulses(self) -> &'static [Pulse] {
        match self {
            Cue::MatchStart => MATCH_START,
            Cue::PointAccepted => POINT_ACCEPTED,
            Cue::SideSwapped => SIDE_SWAPPED,
            Cue::MatchEnded => MATCH_ENDED,
        }
    }

    /// Wall time the cue blocks for.
    pub fn duration_ms(self) -> u32 {
        self.pulses().iter().map(|p| p.on_ms + p.off_ms).sum()
    }
}

pub struct CueSequencer<P> {
    pin: P,
}

impl<P: OutputPin> CueSequencer<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Play `cue` to the end. The output is left low.
    pub async fn play(&mut self, cue: Cue, delay: &mut impl DelayNs) -> Result<(), Error> {
        trace!("cue {}", cue);
        for step in cue.pulses() {
            self.pin.set_high().map_err(|_| Error::Feedback)?;
            delay.delay_ms(step.on_ms).await;
            self.pin.set_low().map_err(|_| Error::Feedback)?;
            if step.off_ms > 0 {
                delay.delay_ms(step.off_ms).await;
            }
        }
        Ok(())
    }
}
