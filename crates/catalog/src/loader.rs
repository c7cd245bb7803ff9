//! Catalog loading and validation.
//!
//! Catalog files are JSON documents with the same shape the types
//! serialize to. Loading is a two-step affair:
//! 1. Deserialize with serde_json (shape errors surface as `Json`)
//! 2. Validate the questionnaire (ids, options, values)

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load and validate a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Reading catalog from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            "Loaded catalog from {} ({} questions)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize the catalog in the format `from_json_str` accepts
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate questionnaire integrity
    ///
    /// Checks that:
    /// - There is at least one question
    /// - Question ids are unique
    /// - Every question has at least one option
    /// - Option values are unique within their question
    /// - No product total can overflow, whatever the answers
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyQuestionnaire);
        }

        let mut seen_ids = HashSet::new();
        for question in &self.questions {
            if !seen_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId {
                    id: question.id.clone(),
                });
            }

            if question.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    question: question.id.clone(),
                });
            }

            let mut seen_values = HashSet::new();
            for option in &question.options {
                if !seen_values.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOptionValue {
                        question: question.id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        self.check_score_ceiling()
    }

    /// Sum each question's best score per product; a full quiz can
    /// never exceed that, so tallies stay in range
    fn check_score_ceiling(&self) -> Result<()> {
        for product in ProductId::ALL {
            let mut ceiling: u32 = 0;
            for question in &self.questions {
                let best = question
                    .options
                    .iter()
                    .map(|o| o.score.get(product))
                    .max()
                    .unwrap_or(0);
                ceiling = ceiling
                    .checked_add(best)
                    .ok_or(CatalogError::ScoreOverflow { product })?;
            }
        }
        Ok(())
    }
}
