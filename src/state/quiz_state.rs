//! Quiz progression state.
//!
//! Tracks the question order for the current run, the player's position
//! and score, and the per-question reveal state. Coin awards are not
//! handled here: the quiz screen reports correct answers upward and the
//! coordinator credits the session.

use rquiz::Question;

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct answer; carries the coin reward for this difficulty.
    Correct { reward: i64 },
    /// Wrong answer; the question stays open until solved or skipped.
    Wrong,
    /// Input ignored (question already resolved, or no quiz running).
    Ignored,
}

/// State of one quiz run.
///
/// Responsibilities:
/// - Holding the (shuffled) question order
/// - Tracking current question index and score
/// - Tracking whether the current question is resolved (answered/skipped)
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    /// The answer index the player picked last, for button coloring.
    selected_answer: Option<usize>,
    /// True once the current question is solved or skipped.
    resolved: bool,
}

impl QuizState {
    /// Creates an empty state with no quiz running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run over the given questions.
    pub fn start(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.resolved = false;
    }

    // ===== Queries =====

    /// The question currently shown, if a run is active.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// 1-based position of the current question, for the progress label.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    /// Total number of questions in this run.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Correctly answered questions so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The answer index picked last for the current question.
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    /// True once the current question is solved or skipped.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// True when the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    // ===== Mutations =====

    /// Registers an answer for the current question.
    ///
    /// A wrong pick leaves the question open so the player can retry;
    /// only the first correct pick scores and resolves it.
    pub fn answer(&mut self, index: usize) -> AnswerOutcome {
        if self.resolved {
            return AnswerOutcome::Ignored;
        }
        let question = match self.questions.get(self.current_index) {
            Some(question) => question,
            None => return AnswerOutcome::Ignored,
        };

        self.selected_answer = Some(index);
        if question.is_correct(index) {
            self.score += 1;
            self.resolved = true;
            AnswerOutcome::Correct {
                reward: question.difficulty.coin_reward(),
            }
        } else {
            AnswerOutcome::Wrong
        }
    }

    /// Skips the current question, revealing the answer without scoring.
    pub fn skip(&mut self) {
        if self.current_question().is_some() {
            self.resolved = true;
        }
    }

    /// Moves to the next question. Returns false when the run is over.
    pub fn advance(&mut self) -> bool {
        if self.is_last_question() {
            return false;
        }
        self.current_index += 1;
        self.selected_answer = None;
        self.resolved = false;
        true
    }
}
