//! Unified error type for peteca-board.
//!
//! We avoid `alloc` - all error variants carry no data at all.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Panels
    /// The addressable-LED string failed to transmit a frame.
    LedEmit,

    // Feedback
    /// The buzzer/lamp output refused a level change.
    Feedback,

    // Buttons
    /// Reading a button input failed.
    ButtonRead,

    // Arbitration
    /// The action token was not acquired within its bound.
    Timeout,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::LedEmit => "LED string emission failed",
            Error::Feedback => "feedback output failed",
            Error::ButtonRead => "button read failed",
            Error::Timeout => "action token timed out",
        };
        f.write_str(msg)
    }
}
