//! Emoji rebus controller.

use crate::model::EmojiChallenge;
use crate::session::AnswerOutcome;

/// One emoji puzzle at a time with four options.
///
/// The hint can only be taken before the challenge resolves.
#[derive(Debug, Clone)]
pub struct EmojiSession {
    challenges: Vec<EmojiChallenge>,
    current: usize,
    selected: Option<String>,
    hint_shown: bool,
    score: u32,
    complete: bool,
}

impl EmojiSession {
    pub fn new(challenges: Vec<EmojiChallenge>) -> Self {
        let complete = challenges.is_empty();
        Self {
            challenges,
            current: 0,
            selected: None,
            hint_shown: false,
            score: 0,
            complete,
        }
    }

    // Read accessors
    pub fn current_challenge(&self) -> Option<&EmojiChallenge> {
        if self.complete {
            return None;
        }
        self.challenges.get(self.current)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.selected.is_some()
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.challenges.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Show the hint for the active challenge.
    pub fn show_hint(&mut self) -> Option<&str> {
        if self.complete || self.is_resolved() {
            return None;
        }
        self.hint_shown = true;
        self.challenges
            .get(self.current)
            .map(|challenge| challenge.hint.as_str())
    }

    /// Resolve the active challenge with `option`.
    pub fn select(&mut self, option: &str) -> AnswerOutcome {
        if self.complete || self.selected.is_some() {
            return AnswerOutcome::Ignored;
        }
        let Some(challenge) = self.challenges.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        let correct = challenge.answer == option;
        self.selected = Some(option.to_string());
        if correct {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Move to the next challenge, or complete after the last one.
    pub fn advance(&mut self) -> bool {
        if self.complete || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        self.hint_shown = false;
        self.current += 1;
        if self.current >= self.challenges.len() {
            self.complete = true;
        }
        true
    }
}
