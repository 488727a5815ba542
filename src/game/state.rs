//! Match state machine.
//!
//! Each counter moves through three stages:
//!
//! ```text
//! Opening --sweep--> Swapped --sweep--> Final --2 points--> match over
//! ```
//!
//! A sweep is a counter reaching 9, which is shown as 0 straight away.
//! As soon as any counter leaves `Opening` the board is *crossed*: each
//! button advances the other counter, shown on its own panel in that
//! counter's colour. Once crossed, the board never uncrosses.

use super::{Outcome, Side};
use crate::config::{STATUS_GOLDEN_COLOR, STATUS_SWAPPED_COLOR};
use crate::display::color::Rgb;
use crate::display::segments::Digit;
use crate::display::Panel;

/// Points that complete a sweep.
const SWEEP: u8 = 9;

/// Golden-point score that wins the match.
const WINNING_POINTS: u8 = 2;

/// Progress of one counter through the match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// No sweep completed yet.
    #[default]
    Opening,
    /// First sweep done.
    Swapped,
    /// Second sweep done, playing golden point.
    Final,
}

/// Status LED state of a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLight {
    Off,
    Swapped,
    GoldenPoint,
}

impl StatusLight {
    pub const fn color(self) -> Rgb {
        match self {
            StatusLight::Off => Rgb::NO_COLOR,
            StatusLight::Swapped => STATUS_SWAPPED_COLOR,
            StatusLight::GoldenPoint => STATUS_GOLDEN_COLOR,
        }
    }
}

impl From<Stage> for StatusLight {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Opening => StatusLight::Off,
            Stage::Swapped => StatusLight::Swapped,
            Stage::Final => StatusLight::GoldenPoint,
        }
    }
}

/// Panels whose digit must be redrawn after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    One(Panel),
    Both,
}

impl Redraw {
    pub fn panels(self) -> &'static [Panel] {
        match self {
            Redraw::One(Panel::Left) => &[Panel::Left],
            Redraw::One(Panel::Right) => &[Panel::Right],
            Redraw::Both => &Panel::ALL,
        }
    }
}

/// Everything the board has to do after one point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub outcome: Outcome,
    pub redraw: Redraw,
    /// Status LED to change before redrawing.
    pub status: Option<(Panel, StatusLight)>,
}

impl Transition {
    fn point(panel: Panel) -> Self {
        Self {
            outcome: Outcome::ContinueMatch,
            redraw: Redraw::One(panel),
            status: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    points: u8,
    stage: Stage,
}

/// Both counters and their stages. Lives for one match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchState {
    tallies: [Tally; 2],
}

impl MatchState {
    /// 0-0, nothing swapped.
    pub const fn new() -> Self {
        Self {
            tallies: [
                Tally {
                    points: 0,
                    stage: Stage::Opening,
                },
                Tally {
                    points: 0,
                    stage: Stage::Opening,
                },
            ],
        }
    }

    pub fn points(&self, counter: Side) -> u8 {
        self.tallies[counter.index()].points
    }

    pub fn stage(&self, counter: Side) -> Stage {
        self.tallies[counter.index()].stage
    }

    /// `counter` has completed its first sweep.
    pub fn swapped(&self, counter: Side) -> bool {
        self.stage(counter) != Stage::Opening
    }

    /// `counter` has entered golden point.
    pub fn is_final(&self, counter: Side) -> bool {
        self.stage(counter) == Stage::Final
    }

    /// Buttons advance the other counter.
    pub fn crossed(&self) -> bool {
        self.swapped(Side::A) || self.swapped(Side::B)
    }

    /// Counter advanced by `side`'s button, and shown on its panel.
    pub fn counter_for(&self, side: Side) -> Side {
        if self.crossed() {
            side.other()
        } else {
            side
        }
    }

    /// Digit and colour `panel` should show.
    pub fn display(&self, panel: Panel) -> (Digit, Rgb) {
        let counter = self.counter_for(panel.side());
        // Counters stay within 0..=8 outside golden point and 0..=2 inside it.
        let digit = Digit::new(self.points(counter)).unwrap_or(Digit::ZERO);
        (digit, counter.color())
    }

    /// Status LED of `panel`: the stage of the counter it shows.
    pub fn status(&self, panel: Panel) -> StatusLight {
        if !self.crossed() {
            return StatusLight::Off;
        }
        self.stage(self.counter_for(panel.side())).into()
    }

    /// Apply one point from `side`'s button.
    pub fn point_scored(&mut self, side: Side) -> Transition {
        let counter = self.counter_for(side);
        let panel = Panel::of(side);

        if self.is_final(counter) {
            self.golden_point(counter, panel)
        } else if self.crossed() {
            self.crossed_sweep(counter, panel)
        } else {
            self.opening_sweep(counter)
        }
    }

    fn opening_sweep(&mut self, counter: Side) -> Transition {
        let tally = &mut self.tallies[counter.index()];
        tally.points += 1;
        if tally.points < SWEEP {
            return Transition::point(Panel::of(counter));
        }

        tally.points = 0;
        tally.stage = Stage::Swapped;
        Transition {
            outcome: Outcome::SideSwapped,
            redraw: Redraw::Both,
            // The counter moves to the opposite panel; its light goes with it.
            status: Some((Panel::of(counter.other()), StatusLight::Swapped)),
        }
    }

    fn crossed_sweep(&mut self, counter: Side, panel: Panel) -> Transition {
        let tally = &mut self.tallies[counter.index()];
        tally.points += 1;
        if tally.points < SWEEP {
            return Transition::point(panel);
        }

        tally.points = 0;
        if tally.stage == Stage::Opening {
            tally.stage = Stage::Swapped;
            return Transition {
                outcome: Outcome::ContinueMatch,
                redraw: Redraw::One(panel),
                status: Some((panel, StatusLight::Swapped)),
            };
        }

        tally.stage = Stage::Final;
        let mut redraw = Redraw::One(panel);

        // A rival already on 1 in golden point loses that point.
        let rival = &mut self.tallies[counter.other().index()];
        if rival.stage == Stage::Final && rival.points == 1 {
            rival.points = 0;
            redraw = Redraw::Both;
        }

        Transition {
            outcome: Outcome::EnteredGoldenPoint,
            redraw,
            status: Some((panel, StatusLight::GoldenPoint)),
        }
    }

    fn golden_point(&mut self, counter: Side, panel: Panel) -> Transition {
        let points = self.points(counter) + 1;
        let rival = self.tallies[counter.other().index()];

        // No 1-1 in golden point: the round starts over instead.
        if rival.stage == Stage::Final && rival.points == 1 && points == 1 {
            self.tallies[counter.index()].points = 0;
            self.tallies[counter.other().index()].points = 0;
            return Transition {
                outcome: Outcome::RoundReset,
                redraw: Redraw::Both,
                status: None,
            };
        }

        self.tallies[counter.index()].points = points;
        if points >= WINNING_POINTS {
            return Transition {
                outcome: Outcome::MatchEnded,
                redraw: Redraw::Both,
                status: None,
            };
        }
        Transition::point(panel)
    }
}
