//! Recommendation engine for the Lumora product quiz.
//!
//! This crate provides:
//! - QuizState snapshots and the answers they hold
//! - Scoring: point tallies and winner selection
//! - QuizEngine: the transitions a presentation layer calls
//!
//! ## State machine
//! ```text
//! InProgress(step) --answer (not last)--> InProgress(step + 1)
//! InProgress(last) --answer-------------> Completed(winner)
//! InProgress(step > 0) --previous-------> InProgress(step - 1)
//! any --reset---------------------------> InProgress(0)
//! ```
//!
//! ## Example Usage
//! ```ignore
//! use engine::{QuizEngine, QuizState};
//!
//! let engine = QuizEngine::lumora();
//! let mut state = QuizState::new();
//! for value in ["noise", "traveler", "mid", "portable"] {
//!     state = engine.choose_option(state, value)?;
//! }
//!
//! let product = engine.recommendation(&state).unwrap();
//! println!("{} - {}", product.name, product.display_price());
//! ```

pub mod error;
pub mod state;
pub mod scoring;
pub mod quiz_engine;

// Re-export main types
pub use error::{EngineError, Result};
pub use state::{Answer, Progress, QuizPhase, QuizState};
pub use scoring::TieBreak;
pub use quiz_engine::QuizEngine;
