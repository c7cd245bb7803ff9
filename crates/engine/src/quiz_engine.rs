//! # Quiz Engine
//!
//! Drives a [`QuizState`] through the questionnaire of a [`Catalog`]:
//! 1. `submit_answer` / `choose_option` record an answer and advance
//! 2. Answering the last question tallies scores and freezes a winner
//! 3. `go_to_previous_step` moves back without forgetting answers
//! 4. `reset` starts over
//!
//! Every transition takes the state by value and returns the next one.

use std::sync::Arc;

use catalog::{Catalog, Product, Question, ScoreVector};
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::scoring::{self, TieBreak};
use crate::state::{Answer, Progress, QuizState};

/// Recommendation engine over a fixed catalog
#[derive(Debug, Clone)]
pub struct QuizEngine {
    catalog: Arc<Catalog>,
    tie_break: TieBreak,
}

impl QuizEngine {
    /// Create an engine for a catalog
    ///
    /// # Arguments
    /// * `catalog` - Shared, already validated catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            tie_break: TieBreak::default(),
        }
    }

    /// Engine over the built-in Lumora quiz
    pub fn lumora() -> Self {
        Self::new(Arc::new(Catalog::lumora()))
    }

    /// Change how equal totals are resolved (builder pattern)
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// The question to show, or `None` once the quiz is completed
    pub fn current_question(&self, state: &QuizState) -> Option<&Question> {
        if state.completed {
            return None;
        }
        self.catalog.question_at(state.current_step)
    }

    /// Record an answer for the current question and move the quiz forward.
    ///
    /// Any earlier answer for `question_id` is replaced. Answering while
    /// on the last question completes the quiz and freezes the winner;
    /// otherwise the step advances by one.
    ///
    /// # Errors
    /// * `QuizCompleted` - the state already holds a recommendation
    /// * `InvalidQuestionId` - `question_id` is not in the catalog
    /// * `OutOfOrderAnswer` - `question_id` is not the question at the current step
    /// * `ScoreOverflow` - the final tally does not fit a product total
    /// * `InvalidSnapshot` - `current_step` is past the last question
    pub fn submit_answer(
        &self,
        state: QuizState,
        question_id: &str,
        value: impl Into<String>,
        score: ScoreVector,
    ) -> Result<QuizState> {
        if state.completed {
            return Err(EngineError::QuizCompleted);
        }
        if self.catalog.position(question_id).is_none() {
            return Err(EngineError::InvalidQuestionId {
                id: question_id.to_string(),
            });
        }
        let expected = self.catalog.question_at(state.current_step).ok_or_else(|| {
            EngineError::InvalidSnapshot {
                reason: format!("step {} is past the last question", state.current_step),
            }
        })?;
        if expected.id != question_id {
            return Err(EngineError::OutOfOrderAnswer {
                expected: expected.id.clone(),
                got: question_id.to_string(),
            });
        }

        let mut next = state;
        let value: String = value.into();
        debug!(
            "Recorded answer {}={} at step {}",
            question_id, value, next.current_step
        );
        next.record(Answer {
            question_id: question_id.to_string(),
            value,
            score,
        });

        let last_step = self.catalog.len().saturating_sub(1);
        if next.current_step < last_step {
            next.current_step += 1;
            return Ok(next);
        }

        let totals = scoring::tally(&next.answers)?;
        let product = scoring::winner(&totals, self.tie_break);
        info!(
            "Quiz completed: recommending {} (core={}, natural={}, travel={}, max={})",
            product, totals.core, totals.natural, totals.travel, totals.max
        );
        next.completed = true;
        next.recommended_product = Some(product);
        Ok(next)
    }

    /// Answer the current question with one of its option values.
    ///
    /// The score vector comes from the catalog, so callers only need to
    /// know what the user picked.
    pub fn choose_option(&self, state: QuizState, value: &str) -> Result<QuizState> {
        let question = self
            .current_question(&state)
            .ok_or(EngineError::QuizCompleted)?;
        let option = question
            .option(value)
            .ok_or_else(|| EngineError::UnknownOption {
                question: question.id.clone(),
                value: value.to_string(),
            })?;
        self.submit_answer(state, &question.id, value, option.score)
    }

    /// Move back one question; a no-op on the first question or after completion
    pub fn go_to_previous_step(&self, state: QuizState) -> QuizState {
        if !Self::can_step_back(&state) {
            debug!(
                "Ignoring step back at step {} (completed: {})",
                state.current_step, state.completed
            );
            return state;
        }
        let mut next = state;
        next.current_step -= 1;
        next
    }

    /// Like [`go_to_previous_step`](Self::go_to_previous_step) but reports
    /// an impossible move as `InvalidStepTransition`
    pub fn step_back(&self, state: QuizState) -> Result<QuizState> {
        if !Self::can_step_back(&state) {
            return Err(EngineError::InvalidStepTransition {
                step: state.current_step,
                completed: state.completed,
            });
        }
        Ok(self.go_to_previous_step(state))
    }

    fn can_step_back(state: &QuizState) -> bool {
        state.current_step > 0 && !state.completed
    }

    /// Start over ("retake")
    pub fn reset(&self) -> QuizState {
        debug!("Quiz reset");
        QuizState::new()
    }

    pub fn progress(&self, state: &QuizState) -> Progress {
        Progress::new(state.current_step, self.catalog.len())
    }

    /// Running totals over the answers given so far
    pub fn tally(&self, state: &QuizState) -> Result<ScoreVector> {
        scoring::tally(&state.answers)
    }

    /// Check a deserialized snapshot against this engine's catalog.
    ///
    /// Deserialization already enforces the catalog-independent
    /// invariants; this adds the step range and answer ids.
    pub fn restore(&self, state: QuizState) -> Result<QuizState> {
        if state.current_step >= self.catalog.len() {
            return Err(EngineError::InvalidSnapshot {
                reason: format!(
                    "step {} out of range for {} questions",
                    state.current_step,
                    self.catalog.len()
                ),
            });
        }
        if let Some(stray) = state
            .answers
            .iter()
            .find(|a| self.catalog.position(&a.question_id).is_none())
        {
            return Err(EngineError::InvalidSnapshot {
                reason: format!("unknown question {}", stray.question_id),
            });
        }
        scoring::tally(&state.answers)?;
        debug!("Restored quiz at step {}", state.current_step);
        Ok(state)
    }

    /// Display metadata for the recommended product
    pub fn recommendation(&self, state: &QuizState) -> Option<&Product> {
        state
            .recommended_product
            .map(|product| self.catalog.product(product))
    }
}
