//! Typed payload items for each game kind.
//!
//! Field names serialize in camelCase to match the wire format the
//! generation schema declares.

use serde::{Deserialize, Serialize};

/// One multiple-choice question (QUIZ, and TRUE_FALSE with
/// "True"/"False" options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A term/definition pair (MATCHING and MEMORY boards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingPair {
    pub id: String,
    pub term: String,
    pub definition: String,
}

/// One story segment with its correct 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceItem {
    pub id: String,
    pub text: String,
    pub order: u32,
}

/// An item to be sorted into one of the named categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingItem {
    pub id: String,
    pub text: String,
    pub category: String,
}

/// Categories plus the pooled items assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingContent {
    pub categories: Vec<String>,
    pub items: Vec<SortingItem>,
}

/// A vocabulary word to unscramble, with a hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnscrambleItem {
    pub id: String,
    pub original: String,
    pub hint: String,
}

/// A story split into segments around the missing words.
///
/// `story_segments` has one more entry than `missing_words`; blank `i`
/// sits between segments `i` and `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillBlankContent {
    pub story_segments: Vec<String>,
    pub missing_words: Vec<String>,
}

/// A riddle with progressively revealed clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleItem {
    pub id: String,
    pub clues: Vec<String>,
    pub answer: String,
}

/// A word/clue pair for the crossword layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordClue {
    pub word: String,
    pub clue: String,
}

/// An emoji sequence to decode, with four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiChallenge {
    pub id: String,
    pub emojis: String,
    pub answer: String,
    pub hint: String,
    pub options: Vec<String>,
}

/// One trivia question on the board game trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
