//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances. Blank lines, `#` comment lines,
/// invalid entries, and duplicates are skipped; first occurrence wins.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let mut seen = std::collections::HashSet::new();
    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["rose", "mindy", "jimenez"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "ROSE");
        assert_eq!(words[1].text(), "MINDY");
        assert_eq!(words[2].text(), "JIMENEZ");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["rose", "two words", "", "r0se", "elise"];
        let words = words_from_slice(input);

        // Only "rose" and "elise" survive validation
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ROSE");
        assert_eq!(words[1].text(), "ELISE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_skips_comments_and_duplicates() {
        use std::io::Write;

        let dir = std::env::temp_dir();
        let path = dir.join("hangman_loader_test_words.txt");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "# default names").unwrap();
            writeln!(file, "rose").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "ROSE").unwrap();
            writeln!(file, "elise").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ROSE");
        assert_eq!(words[1].text(), "ELISE");
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
