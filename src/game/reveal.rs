//! Reveal sequencing for the hangman drawing
//!
//! The drawing is split into a fixed ordered sequence of steps, one per
//! allowed wrong guess. The sequencer advances through them in lock-step with
//! failed guesses; which letter caused the failure never matters.

use super::tracker::MAX_WRONG_GUESSES;
use std::fmt;

/// One stage of the hangman drawing, in reveal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealStep {
    Tray,
    HangerMat,
    HangerTop,
    Rope,
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl RevealStep {
    /// All steps in reveal order
    pub const ALL: [Self; MAX_WRONG_GUESSES] = [
        Self::Tray,
        Self::HangerMat,
        Self::HangerTop,
        Self::Rope,
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Position of this step in the reveal order
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RevealStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tray => "tray",
            Self::HangerMat => "hanger mat",
            Self::HangerTop => "hanger top",
            Self::Rope => "rope",
            Self::Head => "head",
            Self::Body => "body",
            Self::LeftArm => "left arm",
            Self::RightArm => "right arm",
            Self::LeftLeg => "left leg",
            Self::RightLeg => "right leg",
        };
        write!(f, "{name}")
    }
}

/// Error type for reveal requests past the end of the sequence
///
/// Unreachable when the caller respects the loss predicate, since the step
/// count equals the allowed wrong guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    SequenceExhausted,
}

impl fmt::Display for RevealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequenceExhausted => write!(f, "No more steps to display"),
        }
    }
}

impl std::error::Error for RevealError {}

/// Cursor over the fixed reveal sequence
///
/// Steps are consumed strictly in order, one per failed guess, never repeated
/// or skipped, so the cursor position always equals the failed-guess count.
#[derive(Debug, Default, Clone)]
pub struct RevealSequencer {
    revealed: usize,
}

impl RevealSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide every step again for a new round
    pub fn reset(&mut self) {
        self.revealed = 0;
    }

    /// Reveal the first still-hidden step
    ///
    /// # Errors
    /// Returns `RevealError::SequenceExhausted` once every step is revealed.
    pub fn reveal_next(&mut self) -> Result<RevealStep, RevealError> {
        let step = RevealStep::ALL
            .get(self.revealed)
            .copied()
            .ok_or(RevealError::SequenceExhausted)?;
        self.revealed += 1;
        Ok(step)
    }

    /// Whether a given step has been revealed
    #[must_use]
    pub fn is_revealed(&self, step: RevealStep) -> bool {
        step.ordinal() < self.revealed
    }

    /// Number of steps revealed so far
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Steps revealed so far, in reveal order
    pub fn revealed(&self) -> impl Iterator<Item = RevealStep> + '_ {
        RevealStep::ALL[..self.revealed].iter().copied()
    }

    /// True once the drawing is complete
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.revealed == RevealStep::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_matches_wrong_guess_limit() {
        assert_eq!(RevealStep::ALL.len(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn starts_fully_hidden() {
        let sequencer = RevealSequencer::new();
        assert_eq!(sequencer.revealed_count(), 0);
        for step in RevealStep::ALL {
            assert!(!sequencer.is_revealed(step));
        }
    }

    #[test]
    fn reveals_in_fixed_order() {
        let mut sequencer = RevealSequencer::new();
        let revealed: Vec<RevealStep> = (0..10).map(|_| sequencer.reveal_next().unwrap()).collect();
        assert_eq!(revealed, RevealStep::ALL);
    }

    #[test]
    fn no_repeats_no_skips() {
        let mut sequencer = RevealSequencer::new();
        sequencer.reveal_next().unwrap();
        sequencer.reveal_next().unwrap();
        sequencer.reveal_next().unwrap();

        assert!(sequencer.is_revealed(RevealStep::Tray));
        assert!(sequencer.is_revealed(RevealStep::HangerMat));
        assert!(sequencer.is_revealed(RevealStep::HangerTop));
        assert!(!sequencer.is_revealed(RevealStep::Rope));
        assert_eq!(sequencer.revealed_count(), 3);
    }

    #[test]
    fn eleventh_reveal_fails() {
        let mut sequencer = RevealSequencer::new();
        for _ in 0..10 {
            sequencer.reveal_next().unwrap();
        }
        assert!(sequencer.is_exhausted());
        assert_eq!(
            sequencer.reveal_next(),
            Err(RevealError::SequenceExhausted)
        );
        // Count unchanged by the failed request
        assert_eq!(sequencer.revealed_count(), 10);
    }

    #[test]
    fn reset_hides_everything() {
        let mut sequencer = RevealSequencer::new();
        for _ in 0..5 {
            sequencer.reveal_next().unwrap();
        }
        sequencer.reset();
        assert_eq!(sequencer.revealed_count(), 0);
        assert_eq!(sequencer.reveal_next(), Ok(RevealStep::Tray));
    }

    #[test]
    fn revealed_iterates_in_order() {
        let mut sequencer = RevealSequencer::new();
        sequencer.reveal_next().unwrap();
        sequencer.reveal_next().unwrap();
        let steps: Vec<RevealStep> = sequencer.revealed().collect();
        assert_eq!(steps, vec![RevealStep::Tray, RevealStep::HangerMat]);
    }
}
