//! Two-sample button debouncer.
//!
//! A new level is accepted once two consecutive polls agree on it. A poll
//! that falls back to the accepted level drops the pending change.

/// Accepted change of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    pressed: bool,
    pending: Option<bool>,
}

impl Debouncer {
    /// Released, nothing pending.
    pub const fn new() -> Self {
        Self {
            pressed: false,
            pending: None,
        }
    }

    /// Last accepted level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed one poll; returns the edge if this poll confirmed one.
    pub fn sample(&mut self, pressed: bool) -> Option<Edge> {
        if pressed == self.pressed {
            // Bounce: the pending change did not hold.
            self.pending = None;
            return None;
        }

        if self.pending != Some(pressed) {
            self.pending = Some(pressed);
            return None;
        }

        self.pending = None;
        self.pressed = pressed;
        Some(if pressed { Edge::Pressed } else { Edge::Released })
    }
}
