//! Progressive-clue riddle controller.

use crate::model::RiddleItem;
use crate::session::AnswerOutcome;

/// One riddle at a time, clues revealed on demand.
///
/// Scoring rewards early solves: base 3 points, minus one per clue taken
/// beyond the first, never below 1.
#[derive(Debug, Clone)]
pub struct RiddleSession {
    riddles: Vec<RiddleItem>,
    current: usize,
    revealed: usize,
    score: u32,
    complete: bool,
}

impl RiddleSession {
    pub fn new(riddles: Vec<RiddleItem>) -> Self {
        let complete = riddles.is_empty();
        Self {
            riddles,
            current: 0,
            revealed: 1,
            score: 0,
            complete,
        }
    }

    // Read accessors
    pub fn current_riddle(&self) -> Option<&RiddleItem> {
        if self.complete {
            return None;
        }
        self.riddles.get(self.current)
    }

    /// The clues shown so far for the active riddle.
    pub fn revealed_clues(&self) -> &[String] {
        match self.current_riddle() {
            Some(riddle) => &riddle.clues[..self.revealed.min(riddle.clues.len())],
            None => &[],
        }
    }

    pub fn clues_revealed(&self) -> usize {
        self.revealed
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.riddles.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Show the next clue, if the active riddle still has one.
    pub fn reveal_clue(&mut self) -> Option<&str> {
        if self.complete {
            return None;
        }
        let riddle = self.riddles.get(self.current)?;
        if self.revealed >= riddle.clues.len() {
            return None;
        }
        self.revealed += 1;
        riddle.clues.get(self.revealed - 1).map(String::as_str)
    }

    /// Guess the answer, trimmed and case-insensitive.
    pub fn guess(&mut self, answer: &str) -> AnswerOutcome {
        if self.complete {
            return AnswerOutcome::Ignored;
        }
        let Some(riddle) = self.riddles.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        if answer.trim().to_lowercase() != riddle.answer.to_lowercase() {
            return AnswerOutcome::Incorrect;
        }
        let extra_clues = self.revealed.saturating_sub(1) as u32;
        self.score += 3_u32.saturating_sub(extra_clues).max(1);
        self.current += 1;
        self.revealed = 1;
        if self.current >= self.riddles.len() {
            self.complete = true;
        }
        AnswerOutcome::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riddles() -> Vec<RiddleItem> {
        vec![
            RiddleItem {
                id: "r1".to_string(),
                clues: vec![
                    "I am square and leather".to_string(),
                    "I hold four parshios".to_string(),
                    "I am worn on weekday mornings".to_string(),
                ],
                answer: "Tefillin".to_string(),
            },
            RiddleItem {
                id: "r2".to_string(),
                clues: vec!["I burn for eight nights".to_string()],
                answer: "Menorah".to_string(),
            },
        ]
    }

    #[test]
    fn test_first_clue_is_free() {
        let session = RiddleSession::new(riddles());
        assert_eq!(session.revealed_clues().len(), 1);
        assert_eq!(session.revealed_clues()[0], "I am square and leather");
    }

    #[test]
    fn test_clues_reveal_progressively_up_to_the_list() {
        let mut session = RiddleSession::new(riddles());
        assert_eq!(session.reveal_clue(), Some("I hold four parshios"));
        assert_eq!(
            session.reveal_clue(),
            Some("I am worn on weekday mornings")
        );
        assert_eq!(session.reveal_clue(), None);
        assert_eq!(session.revealed_clues().len(), 3);
    }

    #[test]
    fn test_early_solve_scores_three() {
        let mut session = RiddleSession::new(riddles());
        assert_eq!(session.guess("  tefillin "), AnswerOutcome::Correct);
        assert_eq!(session.score(), 3);
        assert_eq!(session.index(), 1);
        assert_eq!(session.revealed_clues().len(), 1);
    }

    #[test]
    fn test_score_drops_per_extra_clue_with_a_floor() {
        let mut session = RiddleSession::new(riddles());
        session.reveal_clue();
        session.reveal_clue();
        session.guess("Tefillin");
        // Two extra clues taken: 3 - 2 = 1.
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_wrong_guess_keeps_the_riddle_active() {
        let mut session = RiddleSession::new(riddles());
        assert_eq!(session.guess("Mezuzah"), AnswerOutcome::Incorrect);
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_last_riddle_completes_with_total_score() {
        let mut session = RiddleSession::new(riddles());
        session.guess("Tefillin");
        session.guess("Menorah");
        assert!(session.is_complete());
        assert_eq!(session.score(), 6);
        assert_eq!(session.current_riddle(), None);
        assert_eq!(session.guess("Menorah"), AnswerOutcome::Ignored);
        assert_eq!(session.reveal_clue(), None);
    }
}
