//! Pure game logic: the generated-game wire model, the two board layout
//! engines, and one play-session controller per game format.
//!
//! Everything here is synchronous and I/O-free. Randomness always enters
//! through a caller-supplied `rand::Rng`, so deals and grids are
//! reproducible under a seeded generator.

pub mod error;
pub mod model;
pub mod puzzle;
pub mod session;
pub mod share;

pub use error::DomainError;

// Re-export the wire model (explicit list in model/mod.rs)
pub use model::{
    CrosswordClue, EmojiChallenge, FillBlankContent, GameData, GameKind, GamePayload,
    MatchingPair, QuizItem, RiddleItem, SequenceItem, SortingContent, SortingItem,
    TriviaQuestion, UnscrambleItem,
};

// Re-export the layout engines
pub use puzzle::{
    CrosswordLayout, Direction, Orientation, PlacedEntry, PlacedWord, WordSearchGrid,
    DEFAULT_GRID_SIZE, WORKING_GRID_SIZE,
};

// Re-export the play sessions (explicit list in session/mod.rs)
pub use session::{
    AnswerOutcome, CardFace, CrosswordSession, EmojiSession, FillBlankSession, FindMatchSession,
    FlipOutcome, GameSession, MatchOutcome, MatchingSession, MemoryCard, MemorySession,
    QuizSession, RiddleSession, SelectionOutcome, SequenceSession, SortingSession, SwapOutcome,
    TriviaTrailSession, UnscrambleSession, WordSearchSession, MIN_FIND_MATCH_TERMS,
};

pub use share::{decode_fragment, encode_fragment, ShareError, FRAGMENT_PREFIX};
