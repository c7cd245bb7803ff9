//! Core domain types for the quiz catalog.
//!
//! Everything here is static configuration: the ordered questionnaire,
//! the per-option score vectors and the display metadata of the four
//! products a quiz can recommend.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Product identifiers
// =============================================================================

/// One of the four sellable product tiers.
///
/// Declaration order is the catalog order. Tie-breaking during scoring
/// depends on it, so new variants must be appended with care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductId {
    Core,
    Natural,
    Travel,
    Max,
}

impl ProductId {
    /// All product ids in catalog order
    pub const ALL: [ProductId; 4] = [
        ProductId::Core,
        ProductId::Natural,
        ProductId::Travel,
        ProductId::Max,
    ];

    /// The lowercase key used in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::Core => "core",
            ProductId::Natural => "natural",
            ProductId::Travel => "travel",
            ProductId::Max => "max",
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        ProductId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownProduct(s.to_string()))
    }
}

// =============================================================================
// Score vectors
// =============================================================================

/// Points an option contributes toward each product.
///
/// A fixed record instead of a string-keyed map: there is no way to
/// score a product that does not exist. Keys missing from a catalog
/// file deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreVector {
    pub core: u32,
    pub natural: u32,
    pub travel: u32,
    pub max: u32,
}

impl ScoreVector {
    pub const fn new(core: u32, natural: u32, travel: u32, max: u32) -> Self {
        Self {
            core,
            natural,
            travel,
            max,
        }
    }

    /// Points for a single product
    pub fn get(&self, product: ProductId) -> u32 {
        match product {
            ProductId::Core => self.core,
            ProductId::Natural => self.natural,
            ProductId::Travel => self.travel,
            ProductId::Max => self.max,
        }
    }

    /// `(product, points)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        ProductId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Entry-wise sum, or `None` if any product total would overflow
    pub fn checked_add(&self, rhs: &ScoreVector) -> Option<ScoreVector> {
        Some(ScoreVector {
            core: self.core.checked_add(rhs.core)?,
            natural: self.natural.checked_add(rhs.natural)?,
            travel: self.travel.checked_add(rhs.travel)?,
            max: self.max.checked_add(rhs.max)?,
        })
    }
}

// =============================================================================
// Questionnaire
// =============================================================================

/// A selectable answer to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Text shown to the user
    pub text: String,
    /// Answer value recorded when this option is chosen
    pub value: String,
    pub score: ScoreVector,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>, score: ScoreVector) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            score,
        }
    }
}

/// A single quiz question.
///
/// `options` order is display order and is preserved through loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Find an option by its answer value
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

// =============================================================================
// Products
// =============================================================================

/// Display metadata for a product tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub tagline: String,
    /// Price in whole US dollars
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
}

impl Product {
    /// Price as shown on the landing page, e.g. `$89`
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Exactly one product per [`ProductId`], so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub core: Product,
    pub natural: Product,
    pub travel: Product,
    pub max: Product,
}

impl ProductCatalog {
    pub fn get(&self, id: ProductId) -> &Product {
        match id {
            ProductId::Core => &self.core,
            ProductId::Natural => &self.natural,
            ProductId::Travel => &self.travel,
            ProductId::Max => &self.max,
        }
    }

    /// Products in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> + '_ {
        ProductId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The ordered questionnaire plus the product catalog.
///
/// Built once (see [`Catalog::lumora`] or the JSON loader) and shared
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub(crate) questions: Vec<Question>,
    pub(crate) products: ProductCatalog,
}

impl Catalog {
    /// Build a catalog, rejecting malformed questionnaires
    pub fn new(questions: Vec<Question>, products: ProductCatalog) -> Result<Self> {
        let catalog = Self {
            questions,
            products,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Questions in traversal order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in the quiz
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the question at a 0-based step
    pub fn question_at(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    /// Get a question by id
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// List position of a question
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> &Product {
        self.products.get(id)
    }
}
