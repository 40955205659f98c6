//! Fill-in-the-blank story controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::FillBlankContent;

/// Ordered blanks fed from a shared, shuffled word pool.
///
/// Placing a word moves it from the pool into a blank; clearing moves it
/// back. The story is only judged on an explicit
/// [`FillBlankSession::check`], which demands every blank filled with
/// exactly the stored word for that position.
#[derive(Debug, Clone)]
pub struct FillBlankSession {
    segments: Vec<String>,
    missing_words: Vec<String>,
    pool: Vec<String>,
    blanks: Vec<Option<String>>,
    attempts: u32,
    solved: bool,
}

impl FillBlankSession {
    pub fn new(content: FillBlankContent, rng: &mut impl Rng) -> Self {
        let mut pool = content.missing_words.clone();
        pool.shuffle(rng);
        let blanks = vec![None; content.missing_words.len()];
        Self {
            segments: content.story_segments,
            missing_words: content.missing_words,
            pool,
            blanks,
            attempts: 0,
            solved: false,
        }
    }

    // Read accessors
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn blanks(&self) -> &[Option<String>] {
        &self.blanks
    }

    pub fn blank(&self, index: usize) -> Option<&str> {
        self.blanks.get(index)?.as_deref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Put a pooled word into blank `index`, swapping out any occupant.
    pub fn place(&mut self, index: usize, word: &str) -> bool {
        if self.solved || index >= self.blanks.len() {
            return false;
        }
        let Some(at) = self.pool.iter().position(|w| w == word) else {
            return false;
        };
        let word = self.pool.remove(at);
        if let Some(previous) = self.blanks[index].replace(word) {
            self.pool.push(previous);
        }
        true
    }

    /// Empty blank `index`, returning its word to the pool.
    pub fn clear(&mut self, index: usize) -> bool {
        if self.solved || index >= self.blanks.len() {
            return false;
        }
        match self.blanks[index].take() {
            Some(word) => {
                self.pool.push(word);
                true
            }
            None => false,
        }
    }

    /// Judge the story. No partial credit; a failed check counts one
    /// attempt and leaves every entry where it was.
    pub fn check(&mut self) -> bool {
        if self.solved {
            return true;
        }
        let solved = self
            .blanks
            .iter()
            .zip(&self.missing_words)
            .all(|(entry, word)| entry.as_deref() == Some(word.as_str()));
        if solved {
            self.solved = true;
        } else {
            self.attempts += 1;
        }
        solved
    }
}
