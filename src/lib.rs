//! Two-panel electronic scoreboard for peteca.
//!
//! Two seven-segment digits built from addressable LEDs, one per end of the
//! court, each with a status LED; one button per side; a buzzer/lamp for
//! audible and visible cues.
//!
//! Everything here is hardware-agnostic: panels are driven through
//! [`display::LedBus`], the cue output and buttons through `embedded-hal`
//! pins, and time through `embedded-hal-async`'s `DelayNs`. The firmware
//! binary (`main.rs`, feature `embedded`) wires those to the nRF52840.
//!
//! Usage: `cargo test` runs the whole crate on the host.

#![cfg_attr(not(test), no_std)]

// Logging macros; must come first so every module below can use them.
#[macro_use]
mod fmt;

pub mod config;
pub mod display;
pub mod error;
pub mod feedback;
pub mod game;
pub mod input;
pub mod ws2812;

#[cfg(test)]
mod mock;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use error::Error;
pub use game::scoreboard::Scoreboard;
pub use game::{Outcome, Side};
pub use input::arbiter::{ActionToken, Arbiter, Dispatch};
