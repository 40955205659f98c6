//! Unscramble-the-word controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::UnscrambleItem;
use crate::session::AnswerOutcome;

/// One scrambled word at a time.
///
/// The scramble is re-rolled until it differs from the original whenever
/// the word has at least two distinct letters. Guesses are compared
/// case-insensitively; a correct guess advances and deals the next
/// scramble, which is why [`UnscrambleSession::submit`] takes the rng.
#[derive(Debug, Clone)]
pub struct UnscrambleSession {
    items: Vec<UnscrambleItem>,
    current: usize,
    scrambled: String,
    hint_used: bool,
    hints_used: u32,
    attempts: u32,
    score: u32,
}

impl UnscrambleSession {
    pub fn new(items: Vec<UnscrambleItem>, rng: &mut impl Rng) -> Self {
        let scrambled = items
            .first()
            .map(|item| scramble(&item.original, rng))
            .unwrap_or_default();
        Self {
            items,
            current: 0,
            scrambled,
            hint_used: false,
            hints_used: 0,
            attempts: 0,
            score: 0,
        }
    }

    // Read accessors
    pub fn current_item(&self) -> Option<&UnscrambleItem> {
        self.items.get(self.current)
    }

    /// The active word's letters in scrambled, uppercased order.
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.items.len()
    }

    /// Reveal the active word's hint and mark the item hint-used.
    pub fn use_hint(&mut self) -> Option<&str> {
        if self.is_complete() {
            return None;
        }
        if !self.hint_used {
            self.hint_used = true;
            self.hints_used += 1;
        }
        self.items.get(self.current).map(|item| item.hint.as_str())
    }

    /// Submit a guess for the active word.
    pub fn submit(&mut self, guess: &str, rng: &mut impl Rng) -> AnswerOutcome {
        let Some(item) = self.items.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        if guess.to_uppercase() != item.original.to_uppercase() {
            self.attempts += 1;
            return AnswerOutcome::Incorrect;
        }
        self.score += 1;
        self.current += 1;
        self.hint_used = false;
        self.scrambled = match self.items.get(self.current) {
            Some(next) => scramble(&next.original, rng),
            None => String::new(),
        };
        AnswerOutcome::Correct
    }
}

/// Uppercase and shuffle a word, re-rolling while the result still spells
/// the original. Words with a single distinct letter are returned as-is.
fn scramble(word: &str, rng: &mut impl Rng) -> String {
    let original: String = word.to_uppercase();
    let mut letters: Vec<char> = original.chars().collect();
    let mut distinct = letters.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return original;
    }
    loop {
        letters.shuffle(rng);
        let shuffled: String = letters.iter().collect();
        if shuffled != original {
            return shuffled;
        }
    }
}
