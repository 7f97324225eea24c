//! State management modules for the quiz GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Quiz state (question order, progress, score, reveal state)
//! - Form state (login/signup input buffers and inline errors)

mod form_state;
mod quiz_state;

pub use form_state::FormState;
pub use quiz_state::{AnswerOutcome, QuizState};
