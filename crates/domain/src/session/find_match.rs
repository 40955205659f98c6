//! Spot-the-shared-term controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::DomainError;
use crate::session::AnswerOutcome;

/// Smallest distinct-term pool that can still deal two panels.
pub const MIN_FIND_MATCH_TERMS: usize = 5;

/// Endless rounds over a term pool.
///
/// Each round shares exactly one term between the two panels; everything
/// else is a filler drawn without replacement, so the panels never share
/// a second term. Picking the shared term deals the next round, which is
/// why [`FindMatchSession::choose`] takes the rng. There is no terminal
/// state.
#[derive(Debug, Clone)]
pub struct FindMatchSession {
    terms: Vec<String>,
    target: String,
    left: Vec<String>,
    right: Vec<String>,
    score: u32,
    misses: u32,
}

impl FindMatchSession {
    pub fn new(terms: Vec<String>, rng: &mut impl Rng) -> Result<Self, DomainError> {
        let mut distinct: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms {
            if !distinct.contains(&term) {
                distinct.push(term);
            }
        }
        if distinct.len() < MIN_FIND_MATCH_TERMS {
            return Err(DomainError::insufficient_content(
                MIN_FIND_MATCH_TERMS,
                distinct.len(),
            ));
        }
        let mut session = Self {
            terms: distinct,
            target: String::new(),
            left: Vec::new(),
            right: Vec::new(),
            score: 0,
            misses: 0,
        };
        session.deal(rng);
        Ok(session)
    }

    // Read accessors
    pub fn left_panel(&self) -> &[String] {
        &self.left
    }

    pub fn right_panel(&self) -> &[String] {
        &self.right
    }

    /// The one term both panels carry this round.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Pick `term` from either panel.
    pub fn choose(&mut self, term: &str, rng: &mut impl Rng) -> AnswerOutcome {
        if term == self.target {
            self.score += 1;
            self.deal(rng);
            return AnswerOutcome::Correct;
        }
        let shown = self.left.iter().any(|t| t == term) || self.right.iter().any(|t| t == term);
        if shown {
            self.misses += 1;
            AnswerOutcome::Incorrect
        } else {
            AnswerOutcome::Ignored
        }
    }

    fn deal(&mut self, rng: &mut impl Rng) {
        let target_at = rng.gen_range(0..self.terms.len());
        self.target = self.terms[target_at].clone();
        let mut fillers: Vec<&String> = self
            .terms
            .iter()
            .filter(|term| **term != self.target)
            .collect();
        fillers.shuffle(rng);

        self.left = Some(&self.target)
            .into_iter()
            .chain(fillers.iter().take(3).copied())
            .cloned()
            .collect();
        self.right = Some(&self.target)
            .into_iter()
            .chain(fillers.iter().skip(3).take(3).copied())
            .cloned()
            .collect();
        self.left.shuffle(rng);
        self.right.shuffle(rng);
    }
}
