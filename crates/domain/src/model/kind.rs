use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The playable game formats.
///
/// Wire tags use the original SCREAMING_SNAKE_CASE spelling so generated
/// payloads and shared links stay readable by the existing client format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameKind {
    Quiz,
    Matching,
    Memory,
    TrueFalse,
    Sequence,
    WordSearch,
    Unscramble,
    Sorting,
    FillInBlank,
    Riddle,
    Crossword,
    EmojiChallenge,
    TriviaTrail,
    FindMatch,
}

impl GameKind {
    /// Every kind, in menu order.
    pub const ALL: [GameKind; 14] = [
        GameKind::Quiz,
        GameKind::Matching,
        GameKind::Memory,
        GameKind::TrueFalse,
        GameKind::Sequence,
        GameKind::WordSearch,
        GameKind::Unscramble,
        GameKind::Sorting,
        GameKind::FillInBlank,
        GameKind::Riddle,
        GameKind::Crossword,
        GameKind::EmojiChallenge,
        GameKind::TriviaTrail,
        GameKind::FindMatch,
    ];

    /// The serialized tag for this kind.
    pub fn wire_tag(&self) -> &'static str {
        match self {
            GameKind::Quiz => "QUIZ",
            GameKind::Matching => "MATCHING",
            GameKind::Memory => "MEMORY",
            GameKind::TrueFalse => "TRUE_FALSE",
            GameKind::Sequence => "SEQUENCE",
            GameKind::WordSearch => "WORD_SEARCH",
            GameKind::Unscramble => "UNSCRAMBLE",
            GameKind::Sorting => "SORTING",
            GameKind::FillInBlank => "FILL_IN_BLANK",
            GameKind::Riddle => "RIDDLE",
            GameKind::Crossword => "CROSSWORD",
            GameKind::EmojiChallenge => "EMOJI_CHALLENGE",
            GameKind::TriviaTrail => "TRIVIA_TRAIL",
            GameKind::FindMatch => "FIND_MATCH",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_tag())
    }
}

impl FromStr for GameKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .find(|kind| kind.wire_tag() == tag)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown game kind: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_round_trip_through_serde() {
        for kind in GameKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.wire_tag()));
            let back: GameKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_from_str_accepts_tags_case_insensitively() {
        assert_eq!("QUIZ".parse::<GameKind>().unwrap(), GameKind::Quiz);
        assert_eq!("quiz".parse::<GameKind>().unwrap(), GameKind::Quiz);
        assert_eq!(
            "word-search".parse::<GameKind>().unwrap(),
            GameKind::WordSearch
        );
        assert_eq!(
            " TRIVIA_TRAIL ".parse::<GameKind>().unwrap(),
            GameKind::TriviaTrail
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        let err = "BINGO".parse::<GameKind>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
