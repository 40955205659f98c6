//! Client-side play sessions, one controller per game format.
//!
//! Each session is a plain synchronous value seeded once from a validated
//! [`GameData`] payload. Timed effects from the original flows (mismatch
//! resets, advance pauses) are explicit methods on the session, so a
//! dropped session can never receive a late transition.

mod crossword;
mod emoji;
mod fill_blank;
mod find_match;
mod matching;
mod memory;
mod quiz;
mod riddle;
mod sequence;
mod sorting;
mod trivia_trail;
mod unscramble;
mod word_search;

pub use crossword::CrosswordSession;
pub use emoji::EmojiSession;
pub use fill_blank::FillBlankSession;
pub use find_match::{FindMatchSession, MIN_FIND_MATCH_TERMS};
pub use matching::MatchingSession;
pub use memory::{CardFace, FlipOutcome, MemoryCard, MemorySession};
pub use quiz::QuizSession;
pub use riddle::RiddleSession;
pub use sequence::{SequenceSession, SwapOutcome};
pub use sorting::SortingSession;
pub use trivia_trail::TriviaTrailSession;
pub use unscramble::UnscrambleSession;
pub use word_search::{SelectionOutcome, WordSearchSession};

use rand::Rng;

use crate::error::DomainError;
use crate::model::{GameData, GamePayload};
use crate::puzzle::{CrosswordLayout, WordSearchGrid};

/// Outcome of answering the active item of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The input hit a guard (item already resolved, session over,
    /// unknown option) and changed nothing.
    Ignored,
}

/// Outcome of pairing two picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// One side picked, waiting for the other.
    Pending,
    Matched,
    Mismatched,
    Ignored,
}

/// A running game of any kind.
///
/// Built from the validated payload with an exhaustive match, so adding a
/// game kind forces a controller decision here.
#[derive(Debug, Clone)]
pub enum GameSession {
    Quiz(QuizSession),
    Matching(MatchingSession),
    Memory(MemorySession),
    Sequence(SequenceSession),
    Sorting(SortingSession),
    Unscramble(UnscrambleSession),
    FillBlank(FillBlankSession),
    Riddle(RiddleSession),
    WordSearch(WordSearchSession),
    Crossword(CrosswordSession),
    Emoji(EmojiSession),
    TriviaTrail(TriviaTrailSession),
    FindMatch(FindMatchSession),
}

impl GameSession {
    /// Seed a session for `data`, validating the payload on the way in.
    ///
    /// QUIZ and TRUE_FALSE share the quiz controller. `rng` drives every
    /// shuffle and grid placement; pass a seeded generator for
    /// reproducible deals.
    pub fn start(data: &GameData, rng: &mut impl Rng) -> Result<Self, DomainError> {
        Ok(match data.payload()? {
            GamePayload::Quiz(items) | GamePayload::TrueFalse(items) => {
                Self::Quiz(QuizSession::new(items))
            }
            GamePayload::Matching(pairs) => Self::Matching(MatchingSession::new(pairs, rng)),
            GamePayload::Memory(pairs) => Self::Memory(MemorySession::new(pairs, rng)),
            GamePayload::Sequence(items) => Self::Sequence(SequenceSession::new(items, rng)),
            GamePayload::WordSearch(words) => {
                Self::WordSearch(WordSearchSession::new(WordSearchGrid::generate(&words, rng)))
            }
            GamePayload::Unscramble(items) => {
                Self::Unscramble(UnscrambleSession::new(items, rng))
            }
            GamePayload::Sorting(content) => Self::Sorting(SortingSession::new(content, rng)),
            GamePayload::FillBlank(content) => {
                Self::FillBlank(FillBlankSession::new(content, rng))
            }
            GamePayload::Riddle(items) => Self::Riddle(RiddleSession::new(items)),
            GamePayload::Crossword(clues) => {
                Self::Crossword(CrosswordSession::new(CrosswordLayout::generate(&clues)))
            }
            GamePayload::EmojiChallenge(items) => Self::Emoji(EmojiSession::new(items)),
            GamePayload::TriviaTrail(items) => Self::TriviaTrail(TriviaTrailSession::new(items)),
            GamePayload::FindMatch(terms) => Self::FindMatch(FindMatchSession::new(terms, rng)?),
        })
    }

    /// Whether the session reached its terminal state.
    ///
    /// Find-match runs in endless rounds and always reports `false`.
    pub fn is_complete(&self) -> bool {
        match self {
            GameSession::Quiz(s) => s.is_complete(),
            GameSession::Matching(s) => s.is_complete(),
            GameSession::Memory(s) => s.is_complete(),
            GameSession::Sequence(s) => s.is_solved(),
            GameSession::Sorting(s) => s.is_complete(),
            GameSession::Unscramble(s) => s.is_complete(),
            GameSession::FillBlank(s) => s.is_solved(),
            GameSession::Riddle(s) => s.is_complete(),
            GameSession::WordSearch(s) => s.is_complete(),
            GameSession::Crossword(s) => s.is_solved(),
            GameSession::Emoji(s) => s.is_complete(),
            GameSession::TriviaTrail(s) => s.is_complete(),
            GameSession::FindMatch(_) => false,
        }
    }
}
