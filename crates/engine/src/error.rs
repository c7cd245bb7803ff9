//! Error types for quiz transitions.

use thiserror::Error;

/// Errors returned by [`QuizEngine`](crate::QuizEngine) transitions.
///
/// None of these are user-facing: a correct presentation layer never
/// produces them, so they exist to catch caller or catalog bugs early.
/// A failed transition never touches the state it was given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The question id is not part of the catalog
    #[error("Invalid question id: {id}")]
    InvalidQuestionId { id: String },

    /// The current question has no option with this value
    #[error("Question {question} has no option {value}")]
    UnknownOption { question: String, value: String },

    /// Answers must be given for the question currently shown
    #[error("Expected an answer for {expected}, got {got}")]
    OutOfOrderAnswer { expected: String, got: String },

    /// Summing the answers' scores overflowed a product total
    #[error("Score total overflowed")]
    ScoreOverflow,

    /// A restored snapshot breaks a state invariant
    #[error("Invalid quiz snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// The quiz already produced a recommendation; reset to answer again
    #[error("Quiz is already completed")]
    QuizCompleted,

    /// Stepping back from the first question or from a completed quiz
    #[error("Cannot go back from step {step} (completed: {completed})")]
    InvalidStepTransition { step: usize, completed: bool },
}

pub type Result<T> = std::result::Result<T, EngineError>;
