//! Button arbitration.
//!
//! Each button runs its own [`Arbiter`] loop. The two loops share nothing
//! but the action token: an async mutex around the [`Scoreboard`]. A press
//! that cannot take the token within the timeout is dropped. A press that
//! does take it keeps it through the transaction, the acknowledgement cue
//! and the cooldown, so two points are never closer than the cooldown.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use super::debounce::{Debouncer, Edge};
use crate::config::{Timing, BUTTON_ACTIVE_LOW};
use crate::display::LedBus;
use crate::error::Error;
use crate::game::scoreboard::Scoreboard;
use crate::game::{Outcome, Side};

/// Single-holder permit over the whole board.
pub type ActionToken<M, B, P, D> = Mutex<M, Scoreboard<B, P, D>>;

/// Take `token`, giving up after `timeout_ms`.
pub async fn acquire<'a, M: RawMutex, T>(
    token: &'a Mutex<M, T>,
    delay: &mut impl DelayNs,
    timeout_ms: u32,
) -> Result<MutexGuard<'a, M, T>, Error> {
    match select(token.lock(), delay.delay_ms(timeout_ms)).await {
        Either::First(guard) => Ok(guard),
        Either::Second(()) => Err(Error::Timeout),
    }
}

/// What happened to a confirmed press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// The point went through the board.
    Scored(Outcome),
    /// The token stayed busy past the timeout; the press did nothing.
    Dropped,
}

pub struct Arbiter<'a, M: RawMutex, B, P, D, I> {
    side: Side,
    button: I,
    debouncer: Debouncer,
    token: &'a ActionToken<M, B, P, D>,
    delay: D,
    timing: Timing,
}

impl<'a, M, B, P, D, I> Arbiter<'a, M, B, P, D, I>
where
    M: RawMutex,
    B: LedBus,
    P: OutputPin,
    D: DelayNs,
    I: InputPin,
{
    pub fn new(
        side: Side,
        button: I,
        token: &'a ActionToken<M, B, P, D>,
        delay: D,
        timing: Timing,
    ) -> Self {
        Self {
            side,
            button,
            debouncer: Debouncer::new(),
            token,
            delay,
            timing,
        }
    }

    /// Poll forever. Hardware errors are logged and polling carries on.
    pub async fn run(&mut self) -> ! {
        info!("Button {} armed", self.side);
        loop {
            if let Err(e) = self.poll().await {
                error!("Button {}: {}", self.side, e);
            }
        }
    }

    /// Wait one debounce interval, sample the button and, on a confirmed
    /// press, dispatch it.
    pub async fn poll(&mut self) -> Result<Option<Dispatch>, Error> {
        self.delay.delay_ms(self.timing.debounce_ms).await;

        let pressed = self.read_pressed()?;
        match self.debouncer.sample(pressed) {
            Some(Edge::Pressed) => self.dispatch().await.map(Some),
            Some(Edge::Released) | None => Ok(None),
        }
    }

    /// Run one point for this side under the action token.
    ///
    /// Once the token is taken the cooldown always runs before it is given
    /// back, even when the transaction failed part way.
    pub async fn dispatch(&mut self) -> Result<Dispatch, Error> {
        let timeout_ms = self.timing.token_timeout_ms;
        let mut board = match acquire(self.token, &mut self.delay, timeout_ms).await {
            Ok(board) => board,
            Err(Error::Timeout) => {
                debug!("Button {}: board busy, press dropped", self.side);
                return Ok(Dispatch::Dropped);
            }
            Err(e) => return Err(e),
        };

        let result = match board.point_scored(self.side).await {
            // A finished match hands the board back at once for the next one.
            Ok(Outcome::MatchEnded) => return Ok(Dispatch::Scored(Outcome::MatchEnded)),
            Ok(outcome) => board.point_accepted().await.map(|()| outcome),
            Err(e) => Err(e),
        };

        self.delay.delay_ms(self.timing.cooldown_ms).await;
        result.map(Dispatch::Scored)
    }

    fn read_pressed(&mut self) -> Result<bool, Error> {
        let level = if BUTTON_ACTIVE_LOW {
            self.button.is_low()
        } else {
            self.button.is_high()
        };
        level.map_err(|_| Error::ButtonRead)
    }
}
