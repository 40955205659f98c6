//! Sort-into-buckets controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{SortingContent, SortingItem};
use crate::session::AnswerOutcome;

/// One pooled item at a time, dropped into a category bucket.
///
/// A correct drop advances the pool; a wrong one keeps the item active
/// and counts a miss.
#[derive(Debug, Clone)]
pub struct SortingSession {
    categories: Vec<String>,
    items: Vec<SortingItem>,
    current: usize,
    misses: u32,
}

impl SortingSession {
    pub fn new(content: SortingContent, rng: &mut impl Rng) -> Self {
        let mut items = content.items;
        items.shuffle(rng);
        Self {
            categories: content.categories,
            items,
            current: 0,
            misses: 0,
        }
    }

    // Read accessors
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn current_item(&self) -> Option<&SortingItem> {
        self.items.get(self.current)
    }

    pub fn sorted_count(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.items.len()
    }

    /// Drop the active item into `category`.
    pub fn place_in(&mut self, category: &str) -> AnswerOutcome {
        let Some(item) = self.items.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        if item.category == category {
            self.current += 1;
            AnswerOutcome::Correct
        } else {
            self.misses += 1;
            AnswerOutcome::Incorrect
        }
    }
}
