//! Score panels - two strings of addressable LEDs shaped as 7-segment digits.
//!
//! ## Components
//!
//! - **Segments**: digit → lit segment table
//! - **Renderer**: draws digits and the status LED, one emission per call
//! - **Colour**: RGB values and the board palette

pub mod color;
pub mod panel;
pub mod segments;

use crate::config::PANEL_LEDS;
use crate::error::Error;
use crate::game::Side;
use color::Rgb;

/// One physical digit display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Panel {
    /// Sits on side A's end of the court.
    Left,
    /// Sits on side B's end of the court.
    Right,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Left, Panel::Right];

    pub const fn index(self) -> usize {
        match self {
            Panel::Left => 0,
            Panel::Right => 1,
        }
    }

    /// Panel wired next to `side`'s button.
    pub const fn of(side: Side) -> Self {
        match side {
            Side::A => Panel::Left,
            Side::B => Panel::Right,
        }
    }

    /// Button side this panel belongs to.
    pub const fn side(self) -> Side {
        match self {
            Panel::Left => Side::A,
            Panel::Right => Side::B,
        }
    }
}

/// Colours of every LED on one string, digit LEDs first, status LED last.
pub type Frame = [Rgb; PANEL_LEDS];

/// Addressable-LED driver.
///
/// `emit` must not return before the whole frame has left the wire.
#[allow(async_fn_in_trait)]
pub trait LedBus {
    async fn emit(&mut self, panel: Panel, frame: &Frame) -> Result<(), Error>;
}
