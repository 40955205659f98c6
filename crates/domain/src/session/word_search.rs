//! Find-the-words session over a generated letter grid.

use crate::puzzle::WordSearchGrid;

/// Outcome of checking one line selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection spelled an unfound placed word, in either direction.
    Found(String),
    /// A readable line, but no remaining word matches.
    Miss,
    /// The session is already complete.
    Ignored,
}

/// Tracks which placed words have been found.
///
/// Only words the grid actually placed count toward completion; dropped
/// words are not findable and never block it.
#[derive(Debug, Clone)]
pub struct WordSearchSession {
    grid: WordSearchGrid,
    found: Vec<String>,
}

impl WordSearchSession {
    pub fn new(grid: WordSearchGrid) -> Self {
        Self {
            grid,
            found: Vec::new(),
        }
    }

    // Read accessors
    pub fn grid(&self) -> &WordSearchGrid {
        &self.grid
    }

    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn remaining(&self) -> Vec<&str> {
        self.grid
            .placed()
            .iter()
            .map(|placement| placement.word())
            .filter(|word| !self.found.iter().any(|f| f == word))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.grid.placed().len()
    }

    /// Check the straight line from `start` to `end` against the unfound
    /// words, forward first, then reversed. First match wins; a found
    /// word is never rematched.
    pub fn select(&mut self, start: (usize, usize), end: (usize, usize)) -> SelectionOutcome {
        if self.is_complete() {
            return SelectionOutcome::Ignored;
        }
        let Some(line) = self.grid.line_string(start, end) else {
            return SelectionOutcome::Miss;
        };
        let reversed: String = line.chars().rev().collect();
        for candidate in [line, reversed] {
            let hit = self
                .grid
                .placed()
                .iter()
                .map(|placement| placement.word())
                .find(|word| *word == candidate && !self.found.iter().any(|f| f == word));
            if let Some(word) = hit {
                let word = word.to_string();
                self.found.push(word.clone());
                return SelectionOutcome::Found(word);
            }
        }
        SelectionOutcome::Miss
    }
}
