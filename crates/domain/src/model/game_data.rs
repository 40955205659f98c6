//! The structured result of one generation call.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::model::content::{
    CrosswordClue, EmojiChallenge, FillBlankContent, MatchingPair, QuizItem, RiddleItem,
    SequenceItem, SortingContent, TriviaQuestion, UnscrambleItem,
};
use crate::model::kind::GameKind;

/// A generated game: the four universal fields plus one populated payload
/// field matching `kind`.
///
/// Held read-only for the duration of a play session; sessions copy what
/// they need at start and never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub title: String,
    pub instructions: String,
    #[serde(rename = "type")]
    pub kind: GameKind,
    pub mentor_key: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_content: Option<Vec<QuizItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_content: Option<Vec<MatchingPair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_content: Option<Vec<SequenceItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_content: Option<SortingContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unscramble_content: Option<Vec<UnscrambleItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_search_content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_blank_content: Option<FillBlankContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riddle_content: Option<Vec<RiddleItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossword_content: Option<Vec<CrosswordClue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_content: Option<Vec<EmojiChallenge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trivia_trail_content: Option<Vec<TriviaQuestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_match_content: Option<Vec<String>>,
}

/// The active payload, one variant per game kind.
///
/// TRUE_FALSE shares the quiz item shape and MEMORY the matching pair
/// shape, but they stay separate variants so dispatch on the payload is an
/// exhaustive, compile-checked match.
#[derive(Debug, Clone, PartialEq)]
pub enum GamePayload {
    Quiz(Vec<QuizItem>),
    Matching(Vec<MatchingPair>),
    Memory(Vec<MatchingPair>),
    TrueFalse(Vec<QuizItem>),
    Sequence(Vec<SequenceItem>),
    WordSearch(Vec<String>),
    Unscramble(Vec<UnscrambleItem>),
    Sorting(SortingContent),
    FillBlank(FillBlankContent),
    Riddle(Vec<RiddleItem>),
    Crossword(Vec<CrosswordClue>),
    EmojiChallenge(Vec<EmojiChallenge>),
    TriviaTrail(Vec<TriviaQuestion>),
    FindMatch(Vec<String>),
}

impl GamePayload {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> GameKind {
        match self {
            GamePayload::Quiz(_) => GameKind::Quiz,
            GamePayload::Matching(_) => GameKind::Matching,
            GamePayload::Memory(_) => GameKind::Memory,
            GamePayload::TrueFalse(_) => GameKind::TrueFalse,
            GamePayload::Sequence(_) => GameKind::Sequence,
            GamePayload::WordSearch(_) => GameKind::WordSearch,
            GamePayload::Unscramble(_) => GameKind::Unscramble,
            GamePayload::Sorting(_) => GameKind::Sorting,
            GamePayload::FillBlank(_) => GameKind::FillInBlank,
            GamePayload::Riddle(_) => GameKind::Riddle,
            GamePayload::Crossword(_) => GameKind::Crossword,
            GamePayload::EmojiChallenge(_) => GameKind::EmojiChallenge,
            GamePayload::TriviaTrail(_) => GameKind::TriviaTrail,
            GamePayload::FindMatch(_) => GameKind::FindMatch,
        }
    }

    /// Number of playable items carried by this payload.
    pub fn item_count(&self) -> usize {
        match self {
            GamePayload::Quiz(items) | GamePayload::TrueFalse(items) => items.len(),
            GamePayload::Matching(pairs) | GamePayload::Memory(pairs) => pairs.len(),
            GamePayload::Sequence(items) => items.len(),
            GamePayload::WordSearch(words) | GamePayload::FindMatch(words) => words.len(),
            GamePayload::Unscramble(items) => items.len(),
            GamePayload::Sorting(content) => content.items.len(),
            GamePayload::FillBlank(content) => content.missing_words.len(),
            GamePayload::Riddle(items) => items.len(),
            GamePayload::Crossword(clues) => clues.len(),
            GamePayload::EmojiChallenge(items) => items.len(),
            GamePayload::TriviaTrail(items) => items.len(),
        }
    }
}

impl GameData {
    /// Create a game with no payload yet; chain [`GameData::with_payload`].
    pub fn new(
        title: impl Into<String>,
        instructions: impl Into<String>,
        kind: GameKind,
        mentor_key: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            instructions: instructions.into(),
            kind,
            mentor_key,
            quiz_content: None,
            matching_content: None,
            sequence_content: None,
            sorting_content: None,
            unscramble_content: None,
            word_search_content: None,
            fill_blank_content: None,
            riddle_content: None,
            crossword_content: None,
            emoji_content: None,
            trivia_trail_content: None,
            find_match_content: None,
        }
    }

    /// Store `payload` in the wire field it belongs to.
    pub fn with_payload(mut self, payload: GamePayload) -> Self {
        match payload {
            GamePayload::Quiz(items) | GamePayload::TrueFalse(items) => {
                self.quiz_content = Some(items);
            }
            GamePayload::Matching(pairs) | GamePayload::Memory(pairs) => {
                self.matching_content = Some(pairs);
            }
            GamePayload::Sequence(items) => self.sequence_content = Some(items),
            GamePayload::WordSearch(words) => self.word_search_content = Some(words),
            GamePayload::Unscramble(items) => self.unscramble_content = Some(items),
            GamePayload::Sorting(content) => self.sorting_content = Some(content),
            GamePayload::FillBlank(content) => self.fill_blank_content = Some(content),
            GamePayload::Riddle(items) => self.riddle_content = Some(items),
            GamePayload::Crossword(clues) => self.crossword_content = Some(clues),
            GamePayload::EmojiChallenge(items) => self.emoji_content = Some(items),
            GamePayload::TriviaTrail(items) => self.trivia_trail_content = Some(items),
            GamePayload::FindMatch(words) => self.find_match_content = Some(words),
        }
        self
    }

    /// The payload matching `kind`, validated to be present and non-empty.
    ///
    /// Payload fields other than the active one are ignored entirely.
    pub fn payload(&self) -> Result<GamePayload, DomainError> {
        match self.kind {
            GameKind::Quiz => required(self.kind, "quizContent", &self.quiz_content)
                .map(GamePayload::Quiz),
            GameKind::TrueFalse => required(self.kind, "quizContent", &self.quiz_content)
                .map(GamePayload::TrueFalse),
            GameKind::Matching => required(self.kind, "matchingContent", &self.matching_content)
                .map(GamePayload::Matching),
            GameKind::Memory => required(self.kind, "matchingContent", &self.matching_content)
                .map(GamePayload::Memory),
            GameKind::Sequence => required(self.kind, "sequenceContent", &self.sequence_content)
                .map(GamePayload::Sequence),
            GameKind::WordSearch => {
                required(self.kind, "wordSearchContent", &self.word_search_content)
                    .map(GamePayload::WordSearch)
            }
            GameKind::Unscramble => {
                required(self.kind, "unscrambleContent", &self.unscramble_content)
                    .map(GamePayload::Unscramble)
            }
            GameKind::Sorting => {
                let content = self
                    .sorting_content
                    .as_ref()
                    .filter(|c| !c.categories.is_empty() && !c.items.is_empty())
                    .ok_or(DomainError::EmptyContent {
                        kind: self.kind,
                        field: "sortingContent",
                    })?;
                Ok(GamePayload::Sorting(content.clone()))
            }
            GameKind::FillInBlank => {
                let content = self
                    .fill_blank_content
                    .as_ref()
                    .filter(|c| !c.story_segments.is_empty() && !c.missing_words.is_empty())
                    .ok_or(DomainError::EmptyContent {
                        kind: self.kind,
                        field: "fillBlankContent",
                    })?;
                Ok(GamePayload::FillBlank(content.clone()))
            }
            GameKind::Riddle => required(self.kind, "riddleContent", &self.riddle_content)
                .map(GamePayload::Riddle),
            GameKind::Crossword => {
                required(self.kind, "crosswordContent", &self.crossword_content)
                    .map(GamePayload::Crossword)
            }
            GameKind::EmojiChallenge => required(self.kind, "emojiContent", &self.emoji_content)
                .map(GamePayload::EmojiChallenge),
            GameKind::TriviaTrail => {
                required(self.kind, "triviaTrailContent", &self.trivia_trail_content)
                    .map(GamePayload::TriviaTrail)
            }
            GameKind::FindMatch => {
                required(self.kind, "findMatchContent", &self.find_match_content)
                    .map(GamePayload::FindMatch)
            }
        }
    }

    /// Check that the declared kind is the one the caller asked for.
    pub fn ensure_kind(&self, expected: GameKind) -> Result<(), DomainError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(DomainError::content_mismatch(expected, self.kind))
        }
    }
}

fn required<T: Clone>(
    kind: GameKind,
    field: &'static str,
    content: &Option<Vec<T>>,
) -> Result<Vec<T>, DomainError> {
    content
        .as_ref()
        .filter(|items| !items.is_empty())
        .cloned()
        .ok_or(DomainError::EmptyContent { kind, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::SortingItem;

    fn quiz_items() -> Vec<QuizItem> {
        vec![QuizItem {
            question: "Where was the Rebbe born?".to_string(),
            options: vec!["Nikolaev".to_string(), "Lubavitch".to_string()],
            correct_answer: "Nikolaev".to_string(),
            explanation: Some("Nissan 11, 5662.".to_string()),
        }]
    }

    #[test]
    fn test_payload_returns_matching_field() {
        let data = GameData::new("Test", "Answer well", GameKind::Quiz, vec![])
            .with_payload(GamePayload::Quiz(quiz_items()));
        let payload = data.payload().unwrap();
        assert_eq!(payload.kind(), GameKind::Quiz);
        assert_eq!(payload.item_count(), 1);
    }

    #[test]
    fn test_payload_missing_field_is_an_error() {
        let data = GameData::new("Test", "Answer well", GameKind::Quiz, vec![]);
        let err = data.payload().unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyContent {
                kind: GameKind::Quiz,
                field: "quizContent",
            }
        );
    }

    #[test]
    fn test_payload_empty_list_is_an_error() {
        let data = GameData::new("Test", "Answer well", GameKind::Riddle, vec![])
            .with_payload(GamePayload::Riddle(vec![]));
        assert!(data.payload().is_err());
    }

    #[test]
    fn test_true_false_reads_the_quiz_field() {
        let data = GameData::new("T/F", "True or false?", GameKind::TrueFalse, vec![])
            .with_payload(GamePayload::TrueFalse(quiz_items()));
        assert!(matches!(
            data.payload().unwrap(),
            GamePayload::TrueFalse(_)
        ));
        assert!(data.quiz_content.is_some());
    }

    #[test]
    fn test_memory_reads_the_matching_field() {
        let pairs = vec![MatchingPair {
            id: "p1".to_string(),
            term: "Ahavas Yisroel".to_string(),
            definition: "Love of a fellow Jew".to_string(),
        }];
        let data = GameData::new("Pairs", "Find pairs", GameKind::Memory, vec![])
            .with_payload(GamePayload::Memory(pairs));
        assert!(matches!(data.payload().unwrap(), GamePayload::Memory(_)));
        assert!(data.matching_content.is_some());
    }

    #[test]
    fn test_sorting_requires_categories_and_items() {
        let empty_categories = SortingContent {
            categories: vec![],
            items: vec![SortingItem {
                id: "i1".to_string(),
                text: "Shabbos".to_string(),
                category: "Yom Tov".to_string(),
            }],
        };
        let data = GameData::new("Sort", "Sort items", GameKind::Sorting, vec![])
            .with_payload(GamePayload::Sorting(empty_categories));
        assert!(data.payload().is_err());
    }

    #[test]
    fn test_ensure_kind_flags_a_wrongly_tagged_game() {
        let data = GameData::new("Test", "Answer well", GameKind::Riddle, vec![]);
        assert!(data.ensure_kind(GameKind::Riddle).is_ok());
        assert_eq!(
            data.ensure_kind(GameKind::Quiz).unwrap_err(),
            DomainError::ContentMismatch {
                expected: GameKind::Quiz,
                got: GameKind::Riddle,
            }
        );
    }

    #[test]
    fn test_wire_format_uses_type_and_camel_case() {
        let data = GameData::new(
            "Test",
            "Answer well",
            GameKind::TriviaTrail,
            vec!["Discuss the story".to_string()],
        )
        .with_payload(GamePayload::TriviaTrail(vec![TriviaQuestion {
            id: "q1".to_string(),
            question: "What bracha is said on bread?".to_string(),
            options: vec!["Hamotzi".to_string(), "Shehakol".to_string()],
            correct_answer: "Hamotzi".to_string(),
        }]));

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["type"], "TRIVIA_TRAIL");
        assert_eq!(json["mentorKey"][0], "Discuss the story");
        assert!(json["triviaTrailContent"].is_array());
        // Unused payload fields stay off the wire entirely.
        assert!(json.get("quizContent").is_none());
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let data: GameData = serde_json::from_str(
            r#"{
                "title": "Word hunt",
                "instructions": "Find the words",
                "type": "WORD_SEARCH",
                "mentorKey": ["Talk about the words"],
                "wordSearchContent": ["TORAH", "MITZVAH"]
            }"#,
        )
        .unwrap();
        assert_eq!(data.kind, GameKind::WordSearch);
        assert!(matches!(data.payload().unwrap(), GamePayload::WordSearch(w) if w.len() == 2));
    }
}
