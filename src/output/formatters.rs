//! Formatting utilities for terminal output

use crate::core::LetterSet;
use crate::game::{RevealSequencer, RevealStep};

/// Format the masked word chars as a spaced line, "R _ S _"
#[must_use]
pub fn masked_line(chars: &[char]) -> String {
    let mut line = String::with_capacity(chars.len() * 2);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(c);
    }
    line
}

/// Format a letter set as a spaced alphabetical line, "B C Z"
#[must_use]
pub fn letters_line(set: &LetterSet) -> String {
    let sorted = set.sorted();
    let chars: Vec<char> = sorted.iter().map(|&b| b as char).collect();
    masked_line(&chars)
}

/// Render the gallows drawing from the revealed steps
///
/// Each reveal step contributes one fragment to a fixed frame; hidden steps
/// leave blank space so the drawing keeps its shape while it grows.
#[must_use]
pub fn gallows_lines(sequencer: &RevealSequencer) -> Vec<String> {
    let shown = |step: RevealStep, fragment: &'static str, blank: &'static str| {
        if sequencer.is_revealed(step) {
            fragment
        } else {
            blank
        }
    };

    let post = shown(RevealStep::HangerMat, "│", " ");
    let top = shown(RevealStep::HangerTop, "┌─────┐", "       ");
    let rope = shown(RevealStep::Rope, "│", " ");
    let head = shown(RevealStep::Head, "O", " ");
    let body = shown(RevealStep::Body, "|", " ");
    let left_arm = shown(RevealStep::LeftArm, "/", " ");
    let right_arm = shown(RevealStep::RightArm, "\\", " ");
    let left_leg = shown(RevealStep::LeftLeg, "/", " ");
    let right_leg = shown(RevealStep::RightLeg, "\\", " ");
    let tray = shown(RevealStep::Tray, "─────────", "         ");

    vec![
        format!("  {top}"),
        format!("  {post}     {rope}"),
        format!("  {post}     {head}"),
        format!("  {post}    {left_arm}{body}{right_arm}"),
        format!("  {post}    {left_leg} {right_leg}"),
        format!("  {post}"),
        format!(" {tray}"),
    ]
}

/// Wrong-guess meter, "███░░░░░░░ 3/10"
#[must_use]
pub fn wrong_guess_bar(failed: usize, max: usize) -> String {
    let filled = failed.min(max);
    format!(
        "{}{} {failed}/{max}",
        "█".repeat(filled),
        "░".repeat(max - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_line_spacing() {
        assert_eq!(masked_line(&['R', '_', 'S', '_']), "R _ S _");
        assert_eq!(masked_line(&[]), "");
    }

    #[test]
    fn letters_line_sorted() {
        let set: LetterSet = [b'Z', b'B', b'C'].into_iter().collect();
        assert_eq!(letters_line(&set), "B C Z");
    }

    #[test]
    fn gallows_empty_is_blank() {
        let sequencer = RevealSequencer::new();
        let lines = gallows_lines(&sequencer);
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn gallows_grows_per_step() {
        let mut sequencer = RevealSequencer::new();
        let mut previous_ink = 0;

        for _ in 0..10 {
            sequencer.reveal_next().unwrap();
            let ink: usize = gallows_lines(&sequencer)
                .iter()
                .map(|l| l.chars().filter(|c| !c.is_whitespace()).count())
                .sum();
            assert!(ink > previous_ink, "a reveal step added no ink");
            previous_ink = ink;
        }
    }

    #[test]
    fn gallows_full_figure() {
        let mut sequencer = RevealSequencer::new();
        while sequencer.reveal_next().is_ok() {}

        let lines = gallows_lines(&sequencer);
        assert!(lines[2].contains('O'));
        assert!(lines[3].contains("/|\\"));
        assert!(lines[4].contains("/ \\"));
    }

    #[test]
    fn wrong_guess_bar_counts() {
        assert_eq!(wrong_guess_bar(0, 10), "░░░░░░░░░░ 0/10");
        assert_eq!(wrong_guess_bar(3, 10), "███░░░░░░░ 3/10");
        assert_eq!(wrong_guess_bar(10, 10), "██████████ 10/10");
    }
}
