//! Point tallying and winner selection.
//!
//! ## Algorithm
//! 1. Start from a zeroed accumulator
//! 2. Add every stored answer's score vector (order does not matter)
//! 3. Walk products in catalog order; a later product takes the lead
//!    only when it beats the current leader (see [`TieBreak`])

use crate::error::{EngineError, Result};
use crate::state::Answer;
use catalog::{ProductId, ScoreVector};

/// How equal totals are resolved when picking a winner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The product declared first in catalog order keeps the lead on ties
    #[default]
    FirstDeclared,
    /// A later product takes the lead on ties. This is what a
    /// `reduce((a, b) => a > b ? a : b)` over the catalog produces.
    LastDeclared,
}

/// Sum the score vectors of all answers
///
/// Fails with `ScoreOverflow` instead of wrapping.
pub fn tally<'a>(answers: impl IntoIterator<Item = &'a Answer>) -> Result<ScoreVector> {
    answers
        .into_iter()
        .try_fold(ScoreVector::default(), |acc, answer| {
            acc.checked_add(&answer.score)
        })
        .ok_or(EngineError::ScoreOverflow)
}

/// Pick the product with the highest total
pub fn winner(tally: &ScoreVector, tie_break: TieBreak) -> ProductId {
    let mut best = ProductId::ALL[0];
    for candidate in ProductId::ALL.into_iter().skip(1) {
        let (points, best_points) = (tally.get(candidate), tally.get(best));
        let takes_lead = match tie_break {
            TieBreak::FirstDeclared => points > best_points,
            TieBreak::LastDeclared => points >= best_points,
        };
        if takes_lead {
            best = candidate;
        }
    }
    best
}

/// All products with their totals, highest first.
///
/// Equal totals keep catalog order, so under [`TieBreak::FirstDeclared`]
/// the first entry is always the winner.
pub fn ranking(tally: &ScoreVector) -> Vec<(ProductId, u32)> {
    let mut ranked: Vec<(ProductId, u32)> = tally.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
