//! Word ladders: step from one word to another changing one letter at a time,
//! every intermediate word coming from a fixed dictionary.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Letters tried at each position when generating extensions
const LETTERS: std::ops::RangeInclusive<char> = 'a'..='z';

#[derive(Clone)]
pub struct WordLadder {
    from_word: String,
    to_word: String,
    /// Shared between a puzzle and all of its extensions
    words: Arc<BTreeSet<String>>,
}

impl WordLadder {
    /// Create a ladder from `from_word` to `to_word` over a shared dictionary.
    ///
    /// Both words must be non-empty lower-case ASCII of equal length. They
    /// need not be in the dictionary, but the ladder can only be solved if
    /// they are.
    pub fn new(
        from_word: impl Into<String>,
        to_word: impl Into<String>,
        words: Arc<BTreeSet<String>>,
    ) -> Result<Self, PuzzleError> {
        let from_word = from_word.into();
        let to_word = to_word.into();

        for word in [&from_word, &to_word] {
            if word.is_empty() {
                return Err(invalid_word(word, "empty"));
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(invalid_word(word, "not lower-case ASCII"));
            }
        }
        if from_word.len() != to_word.len() {
            return Err(invalid_word(&to_word, "length differs from the start word"));
        }

        Ok(Self {
            from_word,
            to_word,
            words,
        })
    }

    /// Create a ladder, building the dictionary from `words`
    pub fn from_words<I, S>(
        from_word: impl Into<String>,
        to_word: impl Into<String>,
        words: I,
    ) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect();
        Self::new(from_word, to_word, Arc::new(words))
    }

    pub fn from_word(&self) -> &str {
        &self.from_word
    }

    pub fn to_word(&self) -> &str {
        &self.to_word
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            from_word: word,
            to_word: self.to_word.clone(),
            words: Arc::clone(&self.words),
        }
    }
}

fn invalid_word(word: &str, reason: &'static str) -> PuzzleError {
    PuzzleError::InvalidWord {
        word: word.to_string(),
        reason,
    }
}

impl Puzzle for WordLadder {
    fn is_solved(&self) -> bool {
        self.from_word == self.to_word
            && self.words.contains(&self.from_word)
            && self.words.contains(&self.to_word)
    }

    fn extensions(&self) -> Vec<Self> {
        if self.is_solved() {
            return Vec::new();
        }

        let mut extensions = Vec::new();
        let mut candidate = self.from_word.clone().into_bytes();
        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in LETTERS {
                let letter = letter as u8;
                if letter == original {
                    continue;
                }
                candidate[i] = letter;
                // Only ASCII bytes were substituted into an ASCII word
                let word = String::from_utf8_lossy(&candidate);
                if self.words.contains(&*word) {
                    extensions.push(self.step_to(word.into_owned()));
                }
            }
            candidate[i] = original;
        }
        extensions
    }
}

impl PartialEq for WordLadder {
    fn eq(&self, other: &Self) -> bool {
        self.from_word == other.from_word
            && self.to_word == other.to_word
            && (Arc::ptr_eq(&self.words, &other.words) || self.words == other.words)
    }
}

impl Eq for WordLadder {}

impl Hash for WordLadder {
    // The dictionary is left out; equal ladders still hash equally
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from_word.hash(state);
        self.to_word.hash(state);
    }
}

impl fmt::Debug for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordLadder")
            .field("from_word", &self.from_word)
            .field("to_word", &self.to_word)
            .field("words", &self.words.len())
            .finish()
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_word, self.to_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{breadth_first_solve, depth_first_solve};

    const WORDS: [&str; 9] = [
        "same", "came", "case", "cast", "cost", "lame", "lane", "sane", "cone",
    ];

    fn ladder(from: &str, to: &str) -> WordLadder {
        WordLadder::from_words(from, to, WORDS).unwrap()
    }

    fn differing_letters(a: &str, b: &str) -> usize {
        a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            WordLadder::from_words("", "cost", WORDS),
            Err(PuzzleError::InvalidWord { reason: "empty", .. })
        ));
        assert!(matches!(
            WordLadder::from_words("Same", "cost", WORDS),
            Err(PuzzleError::InvalidWord { .. })
        ));
        assert!(matches!(
            WordLadder::from_words("same", "costs", WORDS),
            Err(PuzzleError::InvalidWord { .. })
        ));
    }

    #[test]
    fn test_solved_needs_dictionary_word() {
        assert!(ladder("cost", "cost").is_solved());
        assert!(!WordLadder::from_words("cost", "cost", ["same"]).unwrap().is_solved());
        assert!(ladder("cost", "cost").extensions().is_empty());
    }

    #[test]
    fn test_extensions_change_one_letter() {
        let start = ladder("same", "cost");
        let words: Vec<String> = start
            .extensions()
            .iter()
            .map(|p| p.from_word().to_string())
            .collect();
        assert_eq!(words, vec!["came", "lame", "sane"]);
        assert_eq!(start.from_word(), "same");
    }

    #[test]
    fn test_depth_first_scenario() {
        let solution = depth_first_solve(ladder("same", "cost")).unwrap();
        let words: Vec<&str> = solution.path().map(WordLadder::from_word).collect();
        assert_eq!(words.first(), Some(&"same"));
        assert_eq!(words.last(), Some(&"cost"));
        for pair in words.windows(2) {
            assert_eq!(differing_letters(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn test_breadth_first_scenario() {
        let solution = breadth_first_solve(ladder("same", "cost")).unwrap();
        let words: Vec<&str> = solution.path().map(WordLadder::from_word).collect();
        assert_eq!(words, vec!["same", "came", "case", "cast", "cost"]);
    }

    #[test]
    fn test_equality_includes_dictionary() {
        let a = ladder("same", "cost");
        let b = WordLadder::from_words("same", "cost", ["same", "cost"]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, ladder("same", "cost"));
        assert_eq!(a.to_string(), b.to_string());
    }
}
