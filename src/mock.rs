//! Host-side stand-ins for the board hardware, shared by the unit tests.

use core::cell::Cell;
use core::convert::Infallible;
use core::future::{poll_fn, Future};
use core::task::Poll;

use embassy_futures::select::{select, Either};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::display::{Frame, LedBus, Panel};
use crate::error::Error;

/// Virtual millisecond clock, advanced by [`Clock::run`] one tick per
/// executor round.
#[derive(Default)]
pub struct Clock {
    now: Cell<u64>,
}

impl Clock {
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Drive time forward forever; race it against the code under test.
    pub async fn run(&self) {
        loop {
            embassy_futures::yield_now().await;
            self.now.set(self.now.get() + 1);
        }
    }
}

/// Run `fut` to completion while the clock ticks underneath it.
pub fn drive<F: Future>(clock: &Clock, fut: F) -> F::Output {
    match embassy_futures::block_on(select(fut, clock.run())) {
        Either::First(output) => output,
        Either::Second(()) => unreachable!("the clock never stops"),
    }
}

/// Delay that waits on a [`Clock`].
#[derive(Clone, Copy)]
pub struct ClockDelay<'a>(pub &'a Clock);

impl DelayNs for ClockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns.div_ceil(1_000_000)).await
    }

    async fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1_000)).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        let clock = self.0;
        let deadline = clock.now() + u64::from(ms);
        poll_fn(|_| {
            if clock.now() >= deadline {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await
    }
}

/// Delay that returns at once and only sums up what was asked for.
#[derive(Default)]
pub struct InstantDelay {
    pub total_ms: u64,
}

impl DelayNs for InstantDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
    }

    async fn delay_us(&mut self, us: u32) {
        self.total_ms += u64::from(us) / 1_000;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
    }
}

/// LED bus that keeps every emitted frame.
#[derive(Default)]
pub struct RecordingBus {
    pub emissions: Vec<(Panel, Frame)>,
    /// Emissions allowed before every further one fails.
    pub fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn failing_after(count: usize) -> Self {
        Self {
            emissions: Vec::new(),
            fail_after: Some(count),
        }
    }
}

impl LedBus for RecordingBus {
    async fn emit(&mut self, panel: Panel, frame: &Frame) -> Result<(), Error> {
        if self.fail_after.is_some_and(|n| self.emissions.len() >= n) {
            return Err(Error::LedEmit);
        }
        self.emissions.push((panel, *frame));
        Ok(())
    }
}

/// Feedback output that records every level it was driven to.
#[derive(Default)]
pub struct RecordingPin {
    pub levels: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

/// Button input replaying a fixed list of raw line levels; the last level
/// repeats once the script runs out.
pub struct ScriptedButton {
    levels: Vec<bool>,
    next: usize,
}

impl ScriptedButton {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            next: 0,
        }
    }
}

impl ErrorType for ScriptedButton {
    type Error = Infallible;
}

impl InputPin for ScriptedButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let index = self.next.min(self.levels.len().saturating_sub(1));
        self.next += 1;
        Ok(self.levels.get(index).copied().unwrap_or(true))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
