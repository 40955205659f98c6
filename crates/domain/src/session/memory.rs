//! Face-down pairs (memory) controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::MatchingPair;
use crate::session::MatchOutcome;

/// Which half of its pair a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Term,
    Definition,
}

/// One dealt card. Display value with no invariants of its own.
#[derive(Debug, Clone)]
pub struct MemoryCard {
    pub pair_id: String,
    pub text: String,
    pub face: CardFace,
}

/// Outcome of flipping a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Card turned face-up; a second card is still wanted.
    Flipped,
    /// Card turned face-up and a comparison is now pending.
    ComparisonPending,
    Ignored,
}

/// Two face-down cards per pair, shuffled together.
///
/// At most two unresolved cards are face-up at once; while a comparison
/// is pending every further flip is ignored. The comparison itself is an
/// explicit [`MemorySession::resolve_pending`] call, standing in for the
/// original's timed reveal.
#[derive(Debug, Clone)]
pub struct MemorySession {
    cards: Vec<MemoryCard>,
    face_up: Vec<usize>,
    resolved: Vec<usize>,
    moves: u32,
}

impl MemorySession {
    pub fn new(pairs: Vec<MatchingPair>, rng: &mut impl Rng) -> Self {
        let mut cards = Vec::with_capacity(pairs.len() * 2);
        for pair in pairs {
            cards.push(MemoryCard {
                pair_id: pair.id.clone(),
                text: pair.term,
                face: CardFace::Term,
            });
            cards.push(MemoryCard {
                pair_id: pair.id,
                text: pair.definition,
                face: CardFace::Definition,
            });
        }
        cards.shuffle(rng);
        Self {
            cards,
            face_up: Vec::new(),
            resolved: Vec::new(),
            moves: 0,
        }
    }

    // Read accessors
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        self.face_up.contains(&index) || self.resolved.contains(&index)
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        self.resolved.contains(&index)
    }

    pub fn has_pending(&self) -> bool {
        self.face_up.len() == 2
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> usize {
        self.resolved.len() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn is_complete(&self) -> bool {
        self.resolved.len() == self.cards.len()
    }

    /// Turn the card at `index` face-up.
    ///
    /// Ignored while a comparison is pending, and for cards already
    /// face-up, already resolved, or out of range.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.is_complete()
            || self.has_pending()
            || index >= self.cards.len()
            || self.is_face_up(index)
        {
            return FlipOutcome::Ignored;
        }
        self.face_up.push(index);
        if self.has_pending() {
            FlipOutcome::ComparisonPending
        } else {
            FlipOutcome::Flipped
        }
    }

    /// Apply the pending comparison: a match locks both cards face-up,
    /// a mismatch turns both back down. Counts one move either way.
    pub fn resolve_pending(&mut self) -> MatchOutcome {
        let &[first, second] = self.face_up.as_slice() else {
            return MatchOutcome::Ignored;
        };
        self.moves += 1;
        self.face_up.clear();
        if self.cards[first].pair_id == self.cards[second].pair_id {
            self.resolved.push(first);
            self.resolved.push(second);
            MatchOutcome::Matched
        } else {
            MatchOutcome::Mismatched
        }
    }
}
