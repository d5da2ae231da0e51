//! Round state machines
//!
//! Guess tracking, reveal sequencing, and the `Round` that composes them.
//! Everything here is synchronous and owned by the caller; there are no
//! module-level singletons.

mod reveal;
mod round;
mod tracker;

pub use reveal::{RevealError, RevealSequencer, RevealStep};
pub use round::{GuessOutcome, Round, RoundError, RoundStatus};
pub use tracker::{GuessError, GuessTracker, MAX_WRONG_GUESSES};
