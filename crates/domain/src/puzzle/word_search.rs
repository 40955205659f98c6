//! Word search grid placement.
//!
//! Words are placed left-to-right or top-to-bottom only; overlap is legal
//! when the letters agree. A word that cannot be placed within the attempt
//! budget lands in the dropped list instead of failing the whole grid.

use rand::Rng;

/// Grid dimension used when the caller does not pick one.
pub const DEFAULT_GRID_SIZE: usize = 12;

/// Placement attempts per word before it is dropped.
const PLACEMENT_ATTEMPTS: usize = 100;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A word written into the grid, with its origin cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: String,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl PlacedWord {
    /// The placed word, uppercased.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The cells this word occupies, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.word.chars().count()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}

/// A finished word search board: every cell holds a letter, and the
/// placed/dropped split records which input words are actually findable.
#[derive(Debug, Clone)]
pub struct WordSearchGrid {
    size: usize,
    cells: Vec<Vec<char>>,
    placed: Vec<PlacedWord>,
    dropped: Vec<String>,
}

impl WordSearchGrid {
    /// Generate a board of [`DEFAULT_GRID_SIZE`].
    pub fn generate(words: &[String], rng: &mut impl Rng) -> Self {
        Self::generate_sized(DEFAULT_GRID_SIZE, words, rng)
    }

    /// Generate a `size` x `size` board.
    ///
    /// Words are uppercased before placement. Empty words and words longer
    /// than the grid go straight to the dropped list.
    pub fn generate_sized(size: usize, words: &[String], rng: &mut impl Rng) -> Self {
        let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
        let mut placed = Vec::new();
        let mut dropped = Vec::new();

        for raw in words {
            let word: Vec<char> = raw.trim().to_uppercase().chars().collect();
            if word.is_empty() || word.len() > size {
                dropped.push(raw.clone());
                continue;
            }

            let mut placement = None;
            for _ in 0..PLACEMENT_ATTEMPTS {
                let orientation = if rng.gen_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let row = rng.gen_range(0..size);
                let col = rng.gen_range(0..size);
                if can_place(&cells, &word, row, col, orientation) {
                    write_word(&mut cells, &word, row, col, orientation);
                    placement = Some(PlacedWord {
                        word: word.iter().collect(),
                        row,
                        col,
                        orientation,
                    });
                    break;
                }
            }

            match placement {
                Some(p) => placed.push(p),
                None => dropped.push(raw.clone()),
            }
        }

        let mut filled = Vec::with_capacity(size);
        for row in cells {
            let mut out = Vec::with_capacity(size);
            for cell in row {
                out.push(match cell {
                    Some(letter) => letter,
                    None => ALPHABET[rng.gen_range(0..ALPHABET.len())] as char,
                });
            }
            filled.push(out);
        }

        Self {
            size,
            cells: filled,
            placed,
            dropped,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    /// Words actually findable on this board.
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Input words that never fit; callers decide whether to warn.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Cells on the straight line from `start` to `end` inclusive.
    ///
    /// Only purely horizontal, purely vertical, or perfectly diagonal
    /// selections are valid; any other shape (or an out-of-grid endpoint)
    /// yields no cells.
    pub fn line_cells(&self, start: (usize, usize), end: (usize, usize)) -> Vec<(usize, usize)> {
        let (sr, sc) = start;
        let (er, ec) = end;
        if sr >= self.size || sc >= self.size || er >= self.size || ec >= self.size {
            return Vec::new();
        }

        let dr = er as isize - sr as isize;
        let dc = ec as isize - sc as isize;
        let steps = dr.abs().max(dc.abs());
        if steps == 0 {
            return vec![start];
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return Vec::new();
        }

        let (step_r, step_c) = (dr.signum(), dc.signum());
        (0..=steps)
            .map(|i| {
                (
                    (sr as isize + i * step_r) as usize,
                    (sc as isize + i * step_c) as usize,
                )
            })
            .collect()
    }

    /// The letters along a valid line selection, or `None` for an invalid
    /// shape.
    pub fn line_string(&self, start: (usize, usize), end: (usize, usize)) -> Option<String> {
        let cells = self.line_cells(start, end);
        if cells.is_empty() {
            return None;
        }
        Some(cells.iter().map(|&(r, c)| self.cells[r][c]).collect())
    }
}

fn can_place(
    cells: &[Vec<Option<char>>],
    word: &[char],
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    let size = cells.len();
    match orientation {
        Orientation::Horizontal if col + word.len() > size => return false,
        Orientation::Vertical if row + word.len() > size => return false,
        _ => {}
    }
    word.iter().enumerate().all(|(i, &letter)| {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        };
        match cells[r][c] {
            None => true,
            Some(existing) => existing == letter,
        }
    })
}

fn write_word(
    cells: &mut [Vec<Option<char>>],
    word: &[char],
    row: usize,
    col: usize,
    orientation: Orientation,
) {
    for (i, &letter) in word.iter().enumerate() {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        };
        cells[r][c] = Some(letter);
    }
}
