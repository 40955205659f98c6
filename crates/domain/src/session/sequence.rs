//! Put-in-order controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::SequenceItem;

/// Outcome of tapping an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Item marked; the next tap names the swap target.
    Selected,
    /// The marked item was tapped again and unmarked.
    Deselected,
    /// The marked item and the tapped item traded places.
    Swapped,
    Ignored,
}

/// Shuffled items the player reorders by swapping two at a time.
///
/// Order is only judged on an explicit [`SequenceSession::check_order`];
/// a failed check counts one attempt.
#[derive(Debug, Clone)]
pub struct SequenceSession {
    items: Vec<SequenceItem>,
    selected: Option<String>,
    attempts: u32,
    solved: bool,
}

impl SequenceSession {
    pub fn new(mut items: Vec<SequenceItem>, rng: &mut impl Rng) -> Self {
        items.shuffle(rng);
        Self {
            items,
            selected: None,
            attempts: 0,
            solved: false,
        }
    }

    /// Items in their current display order.
    pub fn items(&self) -> &[SequenceItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Tap item `id`: mark it, unmark it, or swap it with the marked one.
    pub fn select(&mut self, id: &str) -> SwapOutcome {
        if self.solved {
            return SwapOutcome::Ignored;
        }
        let Some(tapped) = self.items.iter().position(|item| item.id == id) else {
            return SwapOutcome::Ignored;
        };
        match self.selected.take() {
            None => {
                self.selected = Some(id.to_string());
                SwapOutcome::Selected
            }
            Some(marked) if marked == id => SwapOutcome::Deselected,
            Some(marked) => {
                let Some(other) = self.items.iter().position(|item| item.id == marked) else {
                    return SwapOutcome::Ignored;
                };
                self.items.swap(tapped, other);
                SwapOutcome::Swapped
            }
        }
    }

    /// Judge the current arrangement: solved iff the stored `order`
    /// values never decrease left to right.
    pub fn check_order(&mut self) -> bool {
        if self.solved {
            return true;
        }
        let in_order = self.items.windows(2).all(|pair| pair[0].order <= pair[1].order);
        if in_order {
            self.solved = true;
        } else {
            self.attempts += 1;
        }
        in_order
    }
}
