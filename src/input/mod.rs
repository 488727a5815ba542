//! Button input - debouncing and arbitration of the two side buttons.
//!
//! ## Components
//!
//! - **Debounce**: two-sample edge detector over raw polled levels
//! - **Arbiter**: one loop per button, serialised on the action token

pub mod arbiter;
pub mod debounce;
