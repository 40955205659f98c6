//! Quiz controller, shared by the QUIZ and TRUE_FALSE formats.

use crate::model::QuizItem;
use crate::session::AnswerOutcome;

/// One question at a time over a fixed item list.
///
/// Selecting an option resolves the current question exactly once; moving
/// on takes an explicit [`QuizSession::advance`]. The streak counter
/// resets on a wrong answer and the best run is kept.
#[derive(Debug, Clone)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    current: usize,
    selected: Option<String>,
    score: u32,
    streak: u32,
    max_streak: u32,
    complete: bool,
}

impl QuizSession {
    pub fn new(items: Vec<QuizItem>) -> Self {
        let complete = items.is_empty();
        Self {
            items,
            current: 0,
            selected: None,
            score: 0,
            streak: 0,
            max_streak: 0,
            complete,
        }
    }

    // Read accessors
    pub fn current_question(&self) -> Option<&QuizItem> {
        if self.complete {
            return None;
        }
        self.items.get(self.current)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The explanation for the current question, visible once resolved.
    pub fn explanation(&self) -> Option<&str> {
        if !self.is_resolved() {
            return None;
        }
        self.items.get(self.current)?.explanation.as_deref()
    }

    /// Resolve the current question with `option`.
    ///
    /// The first selection wins; selecting again, or after completion,
    /// changes nothing.
    pub fn select(&mut self, option: &str) -> AnswerOutcome {
        if self.complete || self.selected.is_some() {
            return AnswerOutcome::Ignored;
        }
        let Some(item) = self.items.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        let correct = item.correct_answer == option;
        self.selected = Some(option.to_string());
        if correct {
            self.score += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            AnswerOutcome::Correct
        } else {
            self.streak = 0;
            AnswerOutcome::Incorrect
        }
    }

    /// Move to the next question, or complete after the last one.
    ///
    /// Only a resolved question can be advanced past.
    pub fn advance(&mut self) -> bool {
        if self.complete || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        self.current += 1;
        if self.current >= self.items.len() {
            self.complete = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<QuizItem> {
        vec![
            QuizItem {
                question: "What is the first word of the Torah?".to_string(),
                options: vec!["Bereishis".to_string(), "Shema".to_string()],
                correct_answer: "Bereishis".to_string(),
                explanation: Some("The Torah opens with creation.".to_string()),
            },
            QuizItem {
                question: "How many books are in Chumash?".to_string(),
                options: vec!["4".to_string(), "5".to_string()],
                correct_answer: "5".to_string(),
                explanation: None,
            },
        ]
    }

    #[test]
    fn test_correct_answer_scores_and_extends_streak() {
        let mut session = QuizSession::new(items());
        assert_eq!(session.select("Bereishis"), AnswerOutcome::Correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.max_streak(), 1);
    }

    #[test]
    fn test_wrong_answer_resets_streak_but_keeps_best() {
        let mut session = QuizSession::new(items());
        session.select("Bereishis");
        session.advance();
        assert_eq!(session.select("4"), AnswerOutcome::Incorrect);
        assert_eq!(session.score(), 1);
        assert_eq!(session.streak(), 0);
        assert_eq!(session.max_streak(), 1);
    }

    #[test]
    fn test_second_selection_is_ignored() {
        let mut session = QuizSession::new(items());
        session.select("Shema");
        assert_eq!(session.select("Bereishis"), AnswerOutcome::Ignored);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected(), Some("Shema"));
    }

    #[test]
    fn test_explanation_hidden_until_resolved() {
        let mut session = QuizSession::new(items());
        assert_eq!(session.explanation(), None);
        session.select("Bereishis");
        assert_eq!(session.explanation(), Some("The Torah opens with creation."));
    }

    #[test]
    fn test_advance_requires_a_resolved_question() {
        let mut session = QuizSession::new(items());
        assert!(!session.advance());
        session.select("Bereishis");
        assert!(session.advance());
        assert_eq!(session.index(), 1);
        assert!(!session.is_resolved());
    }

    #[test]
    fn test_advancing_past_the_last_question_completes() {
        let mut session = QuizSession::new(items());
        session.select("Bereishis");
        session.advance();
        session.select("5");
        session.advance();
        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
        assert_eq!(session.current_question(), None);
        assert_eq!(session.select("5"), AnswerOutcome::Ignored);
    }
}
