//! Spelling correction for typofix.
//!
//! This module provides the full correction pipeline: the wrong→right rule
//! dictionary, Levenshtein distance, token normalization with case
//! preservation, suggestion generation, and the orchestrating corrector.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;
pub mod token;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
pub use token::*;
