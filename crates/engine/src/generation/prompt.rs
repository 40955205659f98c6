//! Prompt assembly for the generation call.
//!
//! The persona and output contract are fixed; only the activity
//! requirements vary by kind. Source text is wrapped separately so it can
//! travel as its own part next to the instructions.

use mentorplay_domain::GameKind;

/// Fixed system instruction: the educator persona and the output contract.
pub fn system_instruction() -> String {
    let mut text = String::new();
    text.push_str(
        "You are a creative Jewish educator and game designer for MyShliach. \
         You create games for students (ages 8-12) based on the provided Koivetz content. \
         The Koivetz usually contains stories of Tzaddikim, Sichos, or Halachos.\n\n",
    );
    text.push_str(
        "Every game must include a 'mentorKey' with 5-10 bullet points that help a mentor \
         summarize the main lesson or discuss the core values of the story with their \
         student.\n\n",
    );
    text.push_str(
        "Ensure all content is engaging, accurate to the source, and uses appropriate \
         terminology. Return only JSON matching the schema.",
    );
    text
}

/// Build the user prompt for one game kind.
pub fn build_game_prompt(kind: GameKind) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Create a {kind} game from the provided Koivetz content.\n\n"
    ));
    prompt.push_str(&format!("Activity Requirements for {kind}:\n"));
    prompt.push_str(instruction_for(kind));
    prompt
}

/// Wrap raw source text for attachment as its own prompt part.
pub fn source_section(text: &str) -> String {
    format!("Source content:\n{text}")
}

/// The fixed activity requirements for one kind.
pub fn instruction_for(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Quiz => {
            "Generate 10 multiple-choice questions with 4 options each, \
             one correct answer, and a short explanation."
        }
        GameKind::TrueFalse => {
            "Generate 10 true or false statements using the quizContent format \
             with 2 options: 'True' and 'False'."
        }
        GameKind::Matching | GameKind::Memory => {
            "Generate 8-10 pairs of distinct terms and their corresponding definitions."
        }
        GameKind::Sequence => {
            "Generate 5-7 segments of a story or process that must be arranged \
             in chronological order (order 1-7)."
        }
        GameKind::WordSearch => {
            "Extract a list of 12-15 thematic words related to the content for a \
             word search. Single words only, no spaces."
        }
        GameKind::Sorting => {
            "Define 2-3 logical categories and 12 items that each belong to one category."
        }
        GameKind::Unscramble => {
            "Select 10 key vocabulary words to unscramble with a short hint for each."
        }
        GameKind::FillInBlank => {
            "Generate a story summary with 6-8 missing words. Return full text \
             split into segments and the missing words."
        }
        GameKind::Riddle => "Create 5 riddles. Each must have 3 clues and an answer.",
        GameKind::Crossword => {
            "Provide a list of 8-10 words and their clues. Single words only, no spaces."
        }
        GameKind::EmojiChallenge => {
            "Generate 8 challenges where emojis represent a concept. Provide 4 options \
             and a short hint for each."
        }
        GameKind::TriviaTrail => {
            "Generate 10 trivia questions that serve as steps on a journey."
        }
        GameKind::FindMatch => "Extract 20-30 distinct terms for a fast matching game.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_prompt_embeds_its_instructions() {
        for kind in GameKind::ALL {
            let prompt = build_game_prompt(kind);
            assert!(
                prompt.contains(instruction_for(kind)),
                "prompt for {kind} is missing its activity requirements"
            );
            assert!(
                prompt.contains(kind.wire_tag()),
                "prompt for {kind} is missing the kind tag"
            );
        }
    }

    #[test]
    fn test_system_instruction_states_the_contract() {
        let text = system_instruction();
        assert!(text.contains("mentorKey"));
        assert!(text.contains("Return only JSON"));
        assert!(text.contains("Koivetz"));
    }

    #[test]
    fn test_source_section_prefixes_the_text() {
        assert_eq!(
            source_section("A story about tzedakah."),
            "Source content:\nA story about tzedakah."
        );
    }
}
