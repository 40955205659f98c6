//! Trivia trail board controller.

use crate::model::TriviaQuestion;
use crate::session::AnswerOutcome;

/// A linear board with one step per question.
///
/// The token only moves on a correct answer, so its position always
/// equals the number of questions answered correctly.
#[derive(Debug, Clone)]
pub struct TriviaTrailSession {
    questions: Vec<TriviaQuestion>,
    current: usize,
    selected: Option<String>,
    position: usize,
    complete: bool,
}

impl TriviaTrailSession {
    pub fn new(questions: Vec<TriviaQuestion>) -> Self {
        let complete = questions.is_empty();
        Self {
            questions,
            current: 0,
            selected: None,
            position: 0,
            complete,
        }
    }

    // Read accessors
    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        if self.complete {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.selected.is_some()
    }

    /// Token position on the board, equal to the correct-answer count.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Resolve the current question with `option`.
    pub fn answer(&mut self, option: &str) -> AnswerOutcome {
        if self.complete || self.selected.is_some() {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        let correct = question.correct_answer == option;
        self.selected = Some(option.to_string());
        if correct {
            self.position += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Move to the next question, or complete after the last one.
    pub fn advance(&mut self) -> bool {
        if self.complete || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        self.current += 1;
        if self.current >= self.questions.len() {
            self.complete = true;
        }
        true
    }
}
