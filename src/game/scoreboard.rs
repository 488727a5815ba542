//! The board: match state, both panels and the cue output, owned together.
//!
//! Only the holder of the action token touches a `Scoreboard`; every method
//! is one whole transaction on state, panels and feedback.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use super::state::{MatchState, StatusLight};
use super::{Outcome, Side};
use crate::config::{CHASE_SPEED_MS, MATCH_END_PAUSE_MS};
use crate::display::panel::PanelRenderer;
use crate::display::{LedBus, Panel};
use crate::error::Error;
use crate::feedback::{Cue, CueSequencer};

pub struct Scoreboard<B, P, D> {
    state: MatchState,
    renderer: PanelRenderer<B>,
    cues: CueSequencer<P>,
    delay: D,
}

impl<B, P, D> Scoreboard<B, P, D>
where
    B: LedBus,
    P: OutputPin,
    D: DelayNs,
{
    pub const fn new(renderer: PanelRenderer<B>, cues: CueSequencer<P>, delay: D) -> Self {
        Self {
            state: MatchState::new(),
            renderer,
            cues,
            delay,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn renderer(&self) -> &PanelRenderer<B> {
        &self.renderer
    }

    /// Power-on lamp test over both strings.
    pub async fn self_test(&mut self) -> Result<(), Error> {
        info!("Lamp test");
        self.renderer.chase(&mut self.delay, CHASE_SPEED_MS).await
    }

    /// Fresh match: 0-0 in the opening colours, status lights off.
    pub async fn start_game(&mut self) -> Result<(), Error> {
        self.state = MatchState::new();
        self.clear_status().await?;
        self.redraw(&Panel::ALL).await?;
        self.cues.play(Cue::MatchStart, &mut self.delay).await?;
        info!("Match started");
        Ok(())
    }

    /// Close the match: blank board, end cue, pause, then a fresh 0-0.
    pub async fn end_game(&mut self) -> Result<(), Error> {
        info!(
            "Match ended {}-{}",
            self.state.points(Side::A),
            self.state.points(Side::B)
        );
        self.state = MatchState::new();
        self.clear_status().await?;
        for panel in Panel::ALL {
            self.renderer.clear(panel).await?;
        }
        self.cues.play(Cue::MatchEnded, &mut self.delay).await?;
        self.delay.delay_ms(MATCH_END_PAUSE_MS).await;
        self.redraw(&Panel::ALL).await
    }

    /// One point from `side`'s button, rendered and cued.
    ///
    /// A `MatchEnded` point runs [`Self::end_game`] before returning.
    pub async fn point_scored(&mut self, side: Side) -> Result<Outcome, Error> {
        let transition = self.state.point_scored(side);
        debug!(
            "Point {} -> {} ({}-{})",
            side,
            transition.outcome,
            self.state.points(Side::A),
            self.state.points(Side::B)
        );

        if transition.outcome == Outcome::MatchEnded {
            self.end_game().await?;
            return Ok(Outcome::MatchEnded);
        }

        if let Some((panel, light)) = transition.status {
            self.renderer.set_status(panel, light.color()).await?;
        }
        self.redraw(transition.redraw.panels()).await?;

        match transition.outcome {
            Outcome::SideSwapped => {
                info!("Side swap");
                self.cues.play(Cue::SideSwapped, &mut self.delay).await?;
            }
            Outcome::EnteredGoldenPoint => info!("Golden point"),
            Outcome::RoundReset => info!("Golden point tied, round reset"),
            _ => {}
        }
        Ok(transition.outcome)
    }

    /// Short acknowledgement after a scored point.
    pub async fn point_accepted(&mut self) -> Result<(), Error> {
        self.cues.play(Cue::PointAccepted, &mut self.delay).await
    }

    async fn redraw(&mut self, panels: &[Panel]) -> Result<(), Error> {
        for &panel in panels {
            let (digit, color) = self.state.display(panel);
            self.renderer.draw(panel, digit, color).await?;
        }
        Ok(())
    }

    async fn clear_status(&mut self) -> Result<(), Error> {
        for panel in Panel::ALL {
            self.renderer
                .set_status(panel, StatusLight::Off.color())
                .await?;
        }
        Ok(())
    }
}
