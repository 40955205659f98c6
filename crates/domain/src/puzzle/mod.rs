//! Board layout engines for the two grid puzzles.

mod crossword;
mod word_search;

pub use crossword::{CrosswordLayout, Direction, PlacedEntry, WORKING_GRID_SIZE};
pub use word_search::{Orientation, PlacedWord, WordSearchGrid, DEFAULT_GRID_SIZE};
