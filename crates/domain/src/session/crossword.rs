//! Fill-in session over a generated crossword layout.

use std::collections::HashMap;

use crate::puzzle::CrosswordLayout;

/// User-entered letters keyed by grid coordinate.
///
/// Entries are stored uppercased; cells no placed word covers reject
/// input. Solvedness is derived, never cached, so it is always current
/// after any edit.
#[derive(Debug, Clone)]
pub struct CrosswordSession {
    layout: CrosswordLayout,
    entries: HashMap<(usize, usize), char>,
}

impl CrosswordSession {
    pub fn new(layout: CrosswordLayout) -> Self {
        Self {
            layout,
            entries: HashMap::new(),
        }
    }

    // Read accessors
    pub fn layout(&self) -> &CrosswordLayout {
        &self.layout
    }

    pub fn entry(&self, row: usize, col: usize) -> Option<char> {
        self.entries.get(&(row, col)).copied()
    }

    /// Write one letter at an open cell. Returns false for cells outside
    /// every placed word.
    pub fn enter(&mut self, row: usize, col: usize, letter: char) -> bool {
        if !self.layout.is_open(row, col) {
            return false;
        }
        let letter = letter.to_uppercase().next().unwrap_or(letter);
        self.entries.insert((row, col), letter);
        true
    }

    /// Erase the entry at a cell, if any.
    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        self.entries.remove(&(row, col)).is_some()
    }

    /// Solved iff every cell of every placed word holds its letter.
    pub fn is_solved(&self) -> bool {
        self.layout.entries().iter().all(|entry| {
            entry
                .cells()
                .zip(entry.word().chars())
                .all(|((row, col), letter)| self.entries.get(&(row, col)) == Some(&letter))
        })
    }
}
