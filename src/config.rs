//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and panel geometry
//! live here so they can be tuned in one place.

use crate::display::color::Rgb;

// Panel geometry

/// LEDs per panel: 7 segments × 2 LEDs, plus one status LED.
pub const PANEL_LEDS: usize = 15;

/// Index of the status LED on each string (after the 14 digit LEDs).
pub const STATUS_LED: usize = 14;

// Colours

/// Colour of counter A wherever it is displayed.
pub const COUNTER_A_COLOR: Rgb = Rgb::RED;

/// Colour of counter B wherever it is displayed.
pub const COUNTER_B_COLOR: Rgb = Rgb::BLUE;

/// Status LED once a counter has finished its first sweep.
pub const STATUS_SWAPPED_COLOR: Rgb = Rgb::GREEN;

/// Status LED once a counter has entered golden point.
pub const STATUS_GOLDEN_COLOR: Rgb = Rgb::WHITE;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button A        → P0.11  (active-low, internal pull-up)
//   Button B        → P0.12  (active-low, internal pull-up)
//   Left panel DIN  → P0.13  (PWM0)
//   Right panel DIN → P0.14  (PWM1)
//   Buzzer + lamp   → P0.15

/// Buttons pull the line low when pressed.
pub const BUTTON_ACTIVE_LOW: bool = true;

// Timing

/// Interval between two button polls; a level must hold for two polls.
pub const BUTTON_DEBOUNCE_MS: u32 = 20;

/// Longest a candidate point waits for the action token before it is dropped.
pub const TOKEN_TIMEOUT_MS: u32 = 1500;

/// Minimum spacing between two accepted points, held after each transaction.
pub const POINT_COOLDOWN_MS: u32 = 1000;

/// Pause between the end-of-match cue and the fresh 0-0 board.
pub const MATCH_END_PAUSE_MS: u32 = 2000;

/// Step delay of the power-on lamp test chase.
pub const CHASE_SPEED_MS: u32 = 100;

/// Per-arbiter timing, defaulting to the constants above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Poll cadence of the button input.
    pub debounce_ms: u32,
    /// Bounded wait on the action token.
    pub token_timeout_ms: u32,
    /// Delay between the end of a transaction and releasing the token.
    pub cooldown_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            token_timeout_ms: TOKEN_TIMEOUT_MS,
            cooldown_ms: POINT_COOLDOWN_MS,
        }
    }
}
