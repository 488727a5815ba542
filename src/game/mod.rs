//! Match scoring - the state machine and the board that renders it.
//!
//! Every point goes through [`scoreboard::Scoreboard::point_scored`], which
//! advances the [`state::MatchState`] and then draws, lights and plays what
//! the transition asks for. The scoreboard sits behind the action token, so
//! there is exactly one writer at a time.

pub mod scoreboard;
pub mod state;

use crate::config::{COUNTER_A_COLOR, COUNTER_B_COLOR};
use crate::display::color::Rgb;

/// One of the two buttons, and by extension one of the two counters.
///
/// Counter A starts on side A's panel; after the first side swap it is
/// shown on side B's panel and advanced by side B's button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Colour this counter is drawn in, on whichever panel shows it.
    pub const fn color(self) -> Rgb {
        match self {
            Side::A => COUNTER_A_COLOR,
            Side::B => COUNTER_B_COLOR,
        }
    }
}

/// What a single point did to the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Point counted, nothing else changed phase.
    ContinueMatch,
    /// First sweep of the match: the panels now show the other counter.
    SideSwapped,
    /// A counter finished its second sweep and plays for golden point.
    EnteredGoldenPoint,
    /// Golden point would have tied at 1-1; both counters went back to 0.
    RoundReset,
    /// A counter reached 2 in golden point.
    MatchEnded,
}
