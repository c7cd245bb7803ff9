//! # Catalog Crate
//!
//! Static configuration for the Lumora product quiz.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ProductId, ScoreVector, Question, Product, Catalog)
//! - **dataset**: The built-in Lumora questionnaire and product lineup
//! - **loader**: Load and validate catalogs from JSON files
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, ProductId};
//! use std::path::Path;
//!
//! // Built-in dataset
//! let catalog = Catalog::lumora();
//!
//! // Or a custom one
//! let catalog = Catalog::load_from_file(Path::new("data/lumora.json"))?;
//!
//! let first = catalog.question_at(0).unwrap();
//! println!("{} ({} options)", first.prompt, first.options.len());
//! println!("{}", catalog.product(ProductId::Max).display_price());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod dataset;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    Catalog,
    Product,
    ProductCatalog,
    ProductId,
    Question,
    QuizOption,
    ScoreVector,
};
