//! Crossword layout.
//!
//! The ten longest words are woven into a sparse grid: the first word sits
//! across the working-grid centre and every later word must cross an
//! already-placed word on a shared letter. The board is then cropped to the
//! occupied bounding box plus one cell of padding. Pairs that never reach
//! the board land in the dropped list instead of failing the layout.

use crate::model::CrosswordClue;

/// Working-grid dimension before the final crop.
pub const WORKING_GRID_SIZE: usize = 15;

/// Upper bound on words woven into one puzzle.
const MAX_WORDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

/// A word woven into the grid, with its origin cell and clue text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedEntry {
    word: String,
    clue: String,
    row: usize,
    col: usize,
    direction: Direction,
}

impl PlacedEntry {
    /// The placed word, uppercased.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Clue text, verbatim from the input pair.
    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cells this word occupies, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col, direction) = (self.row, self.col, self.direction);
        (0..self.word.chars().count()).map(move |i| match direction {
            Direction::Across => (row, col + i),
            Direction::Down => (row + i, col),
        })
    }
}

/// A cropped crossword board: open cells hold their solution letter,
/// blocked cells hold nothing. The entries/dropped split records which
/// input pairs survived layout.
#[derive(Debug, Clone)]
pub struct CrosswordLayout {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<char>>>,
    entries: Vec<PlacedEntry>,
    dropped: Vec<CrosswordClue>,
}

impl CrosswordLayout {
    /// Lay out a puzzle on the default working grid.
    pub fn generate(clues: &[CrosswordClue]) -> Self {
        Self::generate_sized(WORKING_GRID_SIZE, clues)
    }

    /// Lay out a puzzle on a `size` x `size` working grid.
    ///
    /// Words are sorted longest first (stable on ties) and capped at ten;
    /// the excess goes straight to the dropped list. The first word anchors
    /// the grid across its centre row. Every later word needs a crossing
    /// with a placed word; pairs without one are dropped, never forced.
    pub fn generate_sized(size: usize, clues: &[CrosswordClue]) -> Self {
        let mut candidates: Vec<&CrosswordClue> = clues.iter().collect();
        candidates.sort_by(|a, b| b.word.chars().count().cmp(&a.word.chars().count()));

        let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
        let mut entries: Vec<PlacedEntry> = Vec::new();
        let mut dropped: Vec<CrosswordClue> = Vec::new();

        for (position, candidate) in candidates.into_iter().enumerate() {
            if position >= MAX_WORDS {
                dropped.push(candidate.clone());
                continue;
            }
            let word: Vec<char> = candidate.word.trim().to_uppercase().chars().collect();
            if word.is_empty() {
                dropped.push(candidate.clone());
                continue;
            }

            // Only the longest word gets the anchor slot; if it cannot fit
            // the board stays empty and everything else drops too.
            let placement = if position == 0 {
                anchor_placement(&grid, &word)
            } else {
                crossing_placement(&grid, &entries, &word)
            };

            match placement {
                Some((row, col, direction)) => {
                    write_word(&mut grid, &word, row, col, direction);
                    entries.push(PlacedEntry {
                        word: word.iter().collect(),
                        clue: candidate.clue.clone(),
                        row,
                        col,
                        direction,
                    });
                }
                None => dropped.push(candidate.clone()),
            }
        }

        if entries.is_empty() {
            return Self {
                rows: 0,
                cols: 0,
                cells: Vec::new(),
                entries,
                dropped,
            };
        }

        // Crop to the occupied bounding box padded by one empty cell,
        // clamped to the working grid.
        let (mut min_r, mut max_r, mut min_c, mut max_c) = (size, 0, size, 0);
        for entry in &entries {
            let len = entry.word.chars().count();
            min_r = min_r.min(entry.row);
            min_c = min_c.min(entry.col);
            match entry.direction {
                Direction::Across => {
                    max_r = max_r.max(entry.row + 1);
                    max_c = max_c.max(entry.col + len);
                }
                Direction::Down => {
                    max_r = max_r.max(entry.row + len);
                    max_c = max_c.max(entry.col + 1);
                }
            }
        }
        min_r = min_r.saturating_sub(1);
        min_c = min_c.saturating_sub(1);
        max_r = (max_r + 1).min(size);
        max_c = (max_c + 1).min(size);

        let cells: Vec<Vec<Option<char>>> = grid[min_r..max_r]
            .iter()
            .map(|row| row[min_c..max_c].to_vec())
            .collect();
        for entry in &mut entries {
            entry.row -= min_r;
            entry.col -= min_c;
        }

        Self {
            rows: max_r - min_r,
            cols: max_c - min_c,
            cells,
            entries,
            dropped,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Solution letter at an open cell; `None` for blocked or out-of-range
    /// cells.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Whether this cell belongs to at least one placed word.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.letter(row, col).is_some()
    }

    /// Words actually woven into the board, in placement order.
    pub fn entries(&self) -> &[PlacedEntry] {
        &self.entries
    }

    /// Input pairs that never reached the board; callers decide whether to
    /// warn.
    pub fn dropped(&self) -> &[CrosswordClue] {
        &self.dropped
    }

    /// Clue number shown at a start cell: the 1-based position of the word
    /// starting there in the placed list. `None` when no word starts here.
    pub fn start_number(&self, row: usize, col: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.row == row && e.col == col)
            .map(|i| i + 1)
    }
}

fn anchor_placement(grid: &[Vec<Option<char>>], word: &[char]) -> Option<(usize, usize, Direction)> {
    let size = grid.len();
    let row = size / 2;
    let col = size.saturating_sub(word.len()) / 2;
    can_place(grid, word, row as isize, col as isize, Direction::Across)
        .then_some((row, col, Direction::Across))
}

/// First legal crossing, scanning placed words in placement order, then
/// candidate letters, then placed-word letters.
fn crossing_placement(
    grid: &[Vec<Option<char>>],
    entries: &[PlacedEntry],
    word: &[char],
) -> Option<(usize, usize, Direction)> {
    for existing in entries {
        let existing_word: Vec<char> = existing.word.chars().collect();
        for (j, &letter) in word.iter().enumerate() {
            for (k, &shared) in existing_word.iter().enumerate() {
                if shared != letter {
                    continue;
                }
                let (cross_row, cross_col) = match existing.direction {
                    Direction::Across => (existing.row as isize, existing.col as isize + k as isize),
                    Direction::Down => (existing.row as isize + k as isize, existing.col as isize),
                };
                let (direction, row, col) = match existing.direction {
                    Direction::Across => (Direction::Down, cross_row - j as isize, cross_col),
                    Direction::Down => (Direction::Across, cross_row, cross_col - j as isize),
                };
                if can_place(grid, word, row, col, direction) {
                    return Some((row as usize, col as usize, direction));
                }
            }
        }
    }
    None
}

fn can_place(
    grid: &[Vec<Option<char>>],
    word: &[char],
    row: isize,
    col: isize,
    direction: Direction,
) -> bool {
    let size = grid.len() as isize;
    let len = word.len() as isize;
    if row < 0 || col < 0 {
        return false;
    }
    let occupied = |r: isize, c: isize| {
        r >= 0 && c >= 0 && r < size && c < size && grid[r as usize][c as usize].is_some()
    };

    match direction {
        Direction::Across => {
            if row >= size || col + len > size {
                return false;
            }
            // No letter may touch either end of the word in its own line.
            if occupied(row, col - 1) || occupied(row, col + len) {
                return false;
            }
            for (i, &letter) in word.iter().enumerate() {
                let c = col + i as isize;
                match grid[row as usize][c as usize] {
                    Some(existing) if existing != letter => return false,
                    Some(_) => {}
                    // A fresh cell may not sit beside a parallel word.
                    None => {
                        if occupied(row - 1, c) || occupied(row + 1, c) {
                            return false;
                        }
                    }
                }
            }
        }
        Direction::Down => {
            if col >= size || row + len > size {
                return false;
            }
            if occupied(row - 1, col) || occupied(row + len, col) {
                return false;
            }
            for (i, &letter) in word.iter().enumerate() {
                let r = row + i as isize;
                match grid[r as usize][col as usize] {
                    Some(existing) if existing != letter => return false,
                    Some(_) => {}
                    None => {
                        if occupied(r, col - 1) || occupied(r, col + 1) {
                            return false;
                        }
                    }
                }
            }
        }
    }
    true
}

fn write_word(
    grid: &mut [Vec<Option<char>>],
    word: &[char],
    row: usize,
    col: usize,
    direction: Direction,
) {
    for (i, &letter) in word.iter().enumerate() {
        match direction {
            Direction::Across => grid[row][col + i] = Some(letter),
            Direction::Down => grid[row + i][col] = Some(letter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clues(list: &[(&str, &str)]) -> Vec<CrosswordClue> {
        list.iter()
            .map(|(word, clue)| CrosswordClue {
                word: word.to_string(),
                clue: clue.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_anchor_word_is_centred_across() {
        let layout = CrosswordLayout::generate(&clues(&[("MENORAH", "Eight branches plus one")]));

        // Working grid 15x15: MENORAH spans (7,4)..(7,10), so the padded
        // crop is rows 6..9 and cols 3..12.
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.cols(), 9);
        let entry = &layout.entries()[0];
        assert_eq!(entry.word(), "MENORAH");
        assert_eq!((entry.row(), entry.col()), (1, 1));
        assert_eq!(entry.direction(), Direction::Across);
    }

    #[test]
    fn test_second_word_crosses_the_first_on_a_shared_letter() {
        let layout = CrosswordLayout::generate(&clues(&[
            ("TORAH", "The five books"),
            ("HALLEL", "Psalms of praise"),
        ]));

        assert_eq!(layout.entries().len(), 2);
        assert!(layout.dropped().is_empty());
        let first = &layout.entries()[0];
        let second = &layout.entries()[1];
        assert_eq!(first.word(), "HALLEL");
        assert_eq!(first.direction(), Direction::Across);
        assert_eq!(second.word(), "TORAH");
        assert_eq!(second.direction(), Direction::Down);

        let first_cells: Vec<(usize, usize)> = first.cells().collect();
        let shared: Vec<(usize, usize)> = second
            .cells()
            .filter(|cell| first_cells.contains(cell))
            .collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(layout.letter(shared[0].0, shared[0].1), Some('A'));
    }

    #[test]
    fn test_every_entry_reads_back_from_the_grid() {
        let layout = CrosswordLayout::generate(&clues(&[
            ("SHABBAT", "Day of rest"),
            ("TEFILLAH", "Prayer"),
            ("BERACHAH", "Blessing"),
            ("SEDER", "Pesach night order"),
            ("AFIKOMAN", "Hidden until the end"),
        ]));

        assert!(layout.entries().len() >= 2);
        for entry in layout.entries() {
            let on_grid: String = entry
                .cells()
                .map(|(r, c)| layout.letter(r, c).unwrap())
                .collect();
            assert_eq!(on_grid, entry.word());
        }
    }

    #[test]
    fn test_cropped_coordinates_stay_in_bounds() {
        let layout = CrosswordLayout::generate(&clues(&[
            ("SHABBAT", "Day of rest"),
            ("TEFILLAH", "Prayer"),
            ("BERACHAH", "Blessing"),
            ("SEDER", "Pesach night order"),
        ]));

        for entry in layout.entries() {
            for (r, c) in entry.cells() {
                assert!(r < layout.rows());
                assert!(c < layout.cols());
            }
        }
    }

    #[test]
    fn test_word_without_a_crossing_is_dropped_with_its_clue() {
        // TZITZIS shares no letter with HAVDALAH.
        let layout = CrosswordLayout::generate(&clues(&[
            ("HAVDALAH", "Ends Shabbat"),
            ("TZITZIS", "Knotted fringes"),
        ]));

        assert_eq!(layout.entries().len(), 1);
        assert_eq!(layout.dropped().len(), 1);
        assert_eq!(layout.dropped()[0].word, "TZITZIS");
        assert_eq!(layout.dropped()[0].clue, "Knotted fringes");
    }

    #[test]
    fn test_longest_word_anchors_regardless_of_input_order() {
        let layout = CrosswordLayout::generate(&clues(&[
            ("LULAV", "Palm branch"),
            ("ETROG", "Citron"),
            ("HOSHANA", "Circuit chant"),
        ]));

        let placed: Vec<&str> = layout.entries().iter().map(|e| e.word()).collect();
        assert_eq!(placed, vec!["HOSHANA", "LULAV", "ETROG"]);
    }

    #[test]
    fn test_start_number_is_position_in_placed_list() {
        let layout = CrosswordLayout::generate(&clues(&[
            ("LULAV", "Palm branch"),
            ("ETROG", "Citron"),
            ("HOSHANA", "Circuit chant"),
        ]));

        for (i, entry) in layout.entries().iter().enumerate() {
            assert_eq!(layout.start_number(entry.row(), entry.col()), Some(i + 1));
        }
        // A blocked corner starts nothing.
        assert_eq!(layout.start_number(0, 0), None);
    }

    #[test]
    fn test_anchor_longer_than_grid_empties_the_layout() {
        let layout = CrosswordLayout::generate_sized(
            5,
            &clues(&[("YERUSHALAYIM", "The holy city"), ("SIMCHA", "Joy")]),
        );

        assert!(layout.entries().is_empty());
        assert_eq!(layout.rows(), 0);
        assert_eq!(layout.cols(), 0);
        assert_eq!(layout.dropped().len(), 2);
    }

    #[test]
    fn test_words_beyond_the_cap_are_dropped_unattempted() {
        let layout = CrosswordLayout::generate(&clues(&[
            ("BEREISHIS", "First book"),
            ("SHEMOS", "Second book"),
            ("VAYIKRA", "Third book"),
            ("BAMIDBAR", "Fourth book"),
            ("DEVARIM", "Fifth book"),
            ("MISHNAH", "Oral teaching"),
            ("GEMARA", "Talmudic analysis"),
            ("CHUMASH", "Printed five books"),
            ("SIDDUR", "Prayer book"),
            ("MACHZOR", "Festival prayer book"),
            ("TEHILLIM", "Psalms"),
            ("HAGGADAH", "Seder text"),
        ]));

        assert!(layout.entries().len() <= MAX_WORDS);
        // Twelve pairs in, at most ten attempted; the rest must surface.
        assert!(layout.dropped().len() >= 2);
        assert_eq!(
            layout.entries().len() + layout.dropped().len(),
            12,
            "every input pair is either placed or dropped"
        );
    }

    #[test]
    fn test_blocked_cells_hold_no_letter() {
        let layout = CrosswordLayout::generate(&clues(&[("MENORAH", "Eight branches")]));

        // Padding row above the single placed word is all blocked.
        for col in 0..layout.cols() {
            assert_eq!(layout.letter(0, col), None);
            assert!(!layout.is_open(0, col));
        }
        assert_eq!(layout.letter(99, 0), None);
    }
}
