//! The structured-output schema for generated games.

use mentorplay_domain::GameKind;
use serde_json::{json, Value};

/// The response schema sent with every generation call.
///
/// All twelve payload fields are declared so a single schema serves every
/// kind; the model fills the one matching the requested `type`. Only the
/// four universal fields are required.
pub fn response_schema() -> Value {
    let kind_tags: Vec<&'static str> = GameKind::ALL.iter().map(|kind| kind.wire_tag()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING"},
            "instructions": {"type": "STRING"},
            "type": {"type": "STRING", "enum": kind_tags},
            "mentorKey": {"type": "ARRAY", "items": {"type": "STRING"}},
            "quizContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": {"type": "STRING"},
                        "options": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "correctAnswer": {"type": "STRING"},
                        "explanation": {"type": "STRING"}
                    },
                    "required": ["question", "options", "correctAnswer"]
                }
            },
            "matchingContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "term": {"type": "STRING"},
                        "definition": {"type": "STRING"}
                    },
                    "required": ["id", "term", "definition"]
                }
            },
            "sequenceContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "text": {"type": "STRING"},
                        "order": {"type": "INTEGER"}
                    },
                    "required": ["id", "text", "order"]
                }
            },
            "sortingContent": {
                "type": "OBJECT",
                "properties": {
                    "categories": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "items": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "id": {"type": "STRING"},
                                "text": {"type": "STRING"},
                                "category": {"type": "STRING"}
                            },
                            "required": ["id", "text", "category"]
                        }
                    }
                },
                "required": ["categories", "items"]
            },
            "unscrambleContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "original": {"type": "STRING"},
                        "hint": {"type": "STRING"}
                    },
                    "required": ["id", "original", "hint"]
                }
            },
            "wordSearchContent": {"type": "ARRAY", "items": {"type": "STRING"}},
            "fillBlankContent": {
                "type": "OBJECT",
                "properties": {
                    "storySegments": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "missingWords": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["storySegments", "missingWords"]
            },
            "riddleContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "clues": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "answer": {"type": "STRING"}
                    },
                    "required": ["id", "clues", "answer"]
                }
            },
            "crosswordContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "word": {"type": "STRING"},
                        "clue": {"type": "STRING"}
                    },
                    "required": ["word", "clue"]
                }
            },
            "emojiContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "emojis": {"type": "STRING"},
                        "answer": {"type": "STRING"},
                        "hint": {"type": "STRING"},
                        "options": {"type": "ARRAY", "items": {"type": "STRING"}}
                    },
                    "required": ["id", "emojis", "answer", "hint", "options"]
                }
            },
            "triviaTrailContent": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "question": {"type": "STRING"},
                        "options": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "correctAnswer": {"type": "STRING"}
                    },
                    "required": ["id", "question", "options", "correctAnswer"]
                }
            },
            "findMatchContent": {"type": "ARRAY", "items": {"type": "STRING"}}
        },
        "required": ["title", "instructions", "type", "mentorKey"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD_FIELDS: [&str; 12] = [
        "quizContent",
        "matchingContent",
        "sequenceContent",
        "sortingContent",
        "unscrambleContent",
        "wordSearchContent",
        "fillBlankContent",
        "riddleContent",
        "crosswordContent",
        "emojiContent",
        "triviaTrailContent",
        "findMatchContent",
    ];

    #[test]
    fn test_schema_declares_every_payload_field() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in PAYLOAD_FIELDS {
            assert!(properties.contains_key(field), "schema is missing {field}");
        }
    }

    #[test]
    fn test_only_the_universal_fields_are_required() {
        let schema = response_schema();
        assert_eq!(
            schema["required"],
            json!(["title", "instructions", "type", "mentorKey"])
        );
    }

    #[test]
    fn test_type_enum_covers_all_kinds() {
        let schema = response_schema();
        let tags = schema["properties"]["type"]["enum"].as_array().unwrap();
        assert_eq!(tags.len(), GameKind::ALL.len());
        for kind in GameKind::ALL {
            assert!(tags.iter().any(|tag| tag == kind.wire_tag()));
        }
    }
}
