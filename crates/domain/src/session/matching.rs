//! Term-to-definition matching controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::MatchingPair;
use crate::session::MatchOutcome;

/// Two shuffled columns over the full pair list.
///
/// Picks are order-free: once a term and a definition are both selected
/// the pair identity is compared, a match resolves the pair for good, and
/// a mismatch clears both picks. Every comparison counts as one attempt.
#[derive(Debug, Clone)]
pub struct MatchingSession {
    pairs: Vec<MatchingPair>,
    term_order: Vec<usize>,
    definition_order: Vec<usize>,
    selected_term: Option<String>,
    selected_definition: Option<String>,
    matched: Vec<String>,
    attempts: u32,
}

impl MatchingSession {
    pub fn new(pairs: Vec<MatchingPair>, rng: &mut impl Rng) -> Self {
        let mut term_order: Vec<usize> = (0..pairs.len()).collect();
        let mut definition_order: Vec<usize> = (0..pairs.len()).collect();
        term_order.shuffle(rng);
        definition_order.shuffle(rng);
        Self {
            pairs,
            term_order,
            definition_order,
            selected_term: None,
            selected_definition: None,
            matched: Vec::new(),
            attempts: 0,
        }
    }

    /// Pairs in term-column display order.
    pub fn terms(&self) -> Vec<&MatchingPair> {
        self.term_order.iter().map(|&i| &self.pairs[i]).collect()
    }

    /// Pairs in definition-column display order.
    pub fn definitions(&self) -> Vec<&MatchingPair> {
        self.definition_order.iter().map(|&i| &self.pairs[i]).collect()
    }

    pub fn selected_term(&self) -> Option<&str> {
        self.selected_term.as_deref()
    }

    pub fn selected_definition(&self) -> Option<&str> {
        self.selected_definition.as_deref()
    }

    pub fn is_matched(&self, id: &str) -> bool {
        self.matched.iter().any(|m| m == id)
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.pairs.len()
    }

    /// Pick the term side of pair `id`. Re-picking replaces the term pick.
    pub fn select_term(&mut self, id: &str) -> MatchOutcome {
        if !self.selectable(id) {
            return MatchOutcome::Ignored;
        }
        self.selected_term = Some(id.to_string());
        self.try_resolve()
    }

    /// Pick the definition side of pair `id`.
    pub fn select_definition(&mut self, id: &str) -> MatchOutcome {
        if !self.selectable(id) {
            return MatchOutcome::Ignored;
        }
        self.selected_definition = Some(id.to_string());
        self.try_resolve()
    }

    fn selectable(&self, id: &str) -> bool {
        !self.is_complete()
            && !self.is_matched(id)
            && self.pairs.iter().any(|pair| pair.id == id)
    }

    fn try_resolve(&mut self) -> MatchOutcome {
        if self.selected_term.is_none() || self.selected_definition.is_none() {
            return MatchOutcome::Pending;
        }
        self.attempts += 1;
        let matched = self.selected_term == self.selected_definition;
        if matched {
            if let Some(id) = self.selected_term.take() {
                self.matched.push(id);
            }
        }
        self.selected_term = None;
        self.selected_definition = None;
        if matched {
            MatchOutcome::Matched
        } else {
            MatchOutcome::Mismatched
        }
    }
}
