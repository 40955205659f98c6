//! Wire model for generated games.

mod content;
mod game_data;
mod kind;

pub use content::{
    CrosswordClue, EmojiChallenge, FillBlankContent, MatchingPair, QuizItem, RiddleItem,
    SequenceItem, SortingContent, SortingItem, TriviaQuestion, UnscrambleItem,
};
pub use game_data::{GameData, GamePayload};
pub use kind::GameKind;
