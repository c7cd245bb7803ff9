//! Quiz state snapshots.
//!
//! A `QuizState` is a plain value: transitions take one by value and
//! hand back the next one, so a caller never observes a half-applied
//! update. Fields are only writable inside this crate; that keeps the
//! completion invariants in the engine's hands.

use crate::error::{EngineError, Result};
use catalog::{ProductId, ScoreVector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The option chosen for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: String,
    /// Copied from the option when it was chosen
    pub score: ScoreVector,
}

/// Complete, serializable snapshot of quiz progress.
///
/// Invariants kept by the engine:
/// - at most one answer per question id
/// - `recommended_product` is `Some` exactly when `completed` is true
/// - `current_step` stays below the question count
///
/// Deserializing checks the first two; the step range depends on the
/// catalog and is checked by [`QuizEngine::restore`](crate::QuizEngine::restore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuizSnapshot")]
pub struct QuizState {
    pub(crate) current_step: usize,
    /// Most recent submission last
    pub(crate) answers: Vec<Answer>,
    pub(crate) completed: bool,
    pub(crate) recommended_product: Option<ProductId>,
}

impl QuizState {
    /// The initial state: step 0, no answers, no recommendation
    pub fn new() -> Self {
        Self::default()
    }

    /// 0-based index of the question being shown
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn recommended_product(&self) -> Option<ProductId> {
        self.recommended_product
    }

    /// The stored answer for a question, if any.
    ///
    /// After stepping back this is how a UI can pre-select the earlier choice.
    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn phase(&self) -> QuizPhase {
        match self.recommended_product {
            Some(product) => QuizPhase::Completed { product },
            None => QuizPhase::InProgress {
                step: self.current_step,
            },
        }
    }

    /// Replace any answer for the same question, then append
    pub(crate) fn record(&mut self, answer: Answer) {
        self.answers.retain(|a| a.question_id != answer.question_id);
        self.answers.push(answer);
    }
}

/// Wire shape of a [`QuizState`] before its invariants are checked
#[derive(Deserialize)]
struct QuizSnapshot {
    current_step: usize,
    answers: Vec<Answer>,
    completed: bool,
    recommended_product: Option<ProductId>,
}

impl TryFrom<QuizSnapshot> for QuizState {
    type Error = EngineError;

    fn try_from(raw: QuizSnapshot) -> Result<Self> {
        if raw.completed != raw.recommended_product.is_some() {
            return Err(EngineError::InvalidSnapshot {
                reason: "completed and recommended_product disagree".to_string(),
            });
        }

        let mut seen = HashSet::new();
        if let Some(dup) = raw
            .answers
            .iter()
            .find(|a| !seen.insert(a.question_id.as_str()))
        {
            return Err(EngineError::InvalidSnapshot {
                reason: format!("question {} answered twice", dup.question_id),
            });
        }

        Ok(Self {
            current_step: raw.current_step,
            answers: raw.answers,
            completed: raw.completed,
            recommended_product: raw.recommended_product,
        })
    }
}

/// Coarse view of a [`QuizState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress { step: usize },
    Completed { product: ProductId },
}

/// Where the user is in the questionnaire, as a progress bar shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based question number
    pub question: usize,
    pub total: usize,
    /// `question / total` as a percentage, rounded half up
    pub percent: u8,
}

impl Progress {
    pub(crate) fn new(step: usize, total: usize) -> Self {
        let question = step.saturating_add(1);
        let percent = question
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_add(total / 2))
            .and_then(|scaled| scaled.checked_div(total))
            .map_or(100, |p| p.min(100)) as u8;
        Self {
            question,
            total,
            percent,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question {} of {} ({}%)",
            self.question, self.total, self.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: &str, value: &str, score: ScoreVector) -> Answer {
        Answer {
            question_id: question_id.to_string(),
            value: value.to_string(),
            score,
        }
    }

    #[test]
    fn test_new_state_is_initial() {
        let state = QuizState::new();
        assert_eq!(state.current_step(), 0);
        assert!(state.answers().is_empty());
        assert!(!state.is_completed());
        assert_eq!(state.recommended_product(), None);
        assert_eq!(state.phase(), QuizPhase::InProgress { step: 0 });
    }

    #[test]
    fn test_record_replaces_and_moves_to_end() {
        let mut state = QuizState::new();
        state.record(answer("a", "one", ScoreVector::new(1, 0, 0, 0)));
        state.record(answer("b", "two", ScoreVector::new(0, 1, 0, 0)));
        state.record(answer("a", "three", ScoreVector::new(0, 0, 1, 0)));

        let ids: Vec<&str> = state.answers().iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(state.answer_for("a").unwrap().value, "three");
    }

    #[test]
    fn test_progress_rounding() {
        assert_eq!(Progress::new(0, 4).percent, 25);
        assert_eq!(Progress::new(3, 4).percent, 100);
        // 1/3 and 2/3 round like the landing page's progress bar
        assert_eq!(Progress::new(0, 3).percent, 33);
        assert_eq!(Progress::new(1, 3).percent, 67);
        assert_eq!(Progress::new(1, 4).to_string(), "Question 2 of 4 (50%)");
    }

    #[test]
    fn test_progress_never_overflows() {
        let progress = Progress::new(usize::MAX, 4);
        assert_eq!(progress.question, usize::MAX);
        assert_eq!(progress.percent, 100);
        assert_eq!(Progress::new(0, 0).percent, 100);
    }

    #[test]
    fn test_snapshot_completed_without_product_rejected() {
        let json = r#"{"current_step":0,"answers":[],"completed":true,"recommended_product":null}"#;
        let err = serde_json::from_str::<QuizState>(json).unwrap_err();
        assert!(err.to_string().contains("completed and recommended_product disagree"));
    }

    #[test]
    fn test_snapshot_product_without_completion_rejected() {
        let json = r#"{"current_step":1,"answers":[],"completed":false,"recommended_product":"max"}"#;
        assert!(serde_json::from_str::<QuizState>(json).is_err());
    }

    #[test]
    fn test_snapshot_duplicate_answers_rejected() {
        let json = r#"{
            "current_step": 2,
            "answers": [
                {"question_id": "a", "value": "x", "score": {}},
                {"question_id": "a", "value": "y", "score": {}}
            ],
            "completed": false,
            "recommended_product": null
        }"#;
        let err = serde_json::from_str::<QuizState>(json).unwrap_err();
        assert!(err.to_string().contains("question a answered twice"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = QuizState::new();
        state.record(answer("a", "one", ScoreVector::new(1, 2, 3, 4)));
        state.current_step = 1;

        let json = serde_json::to_string(&state).unwrap();
        let restored: QuizState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
