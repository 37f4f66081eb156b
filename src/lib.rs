//! # typofix
//!
//! A small dictionary-based text auto-correction library.
//!
//! ## Features
//!
//! - Static wrong→right correction dictionary with a built-in rule set
//! - Case-preserving word substitution (ALL CAPS / Capitalized / lower)
//! - Punctuation-preserving tokenization
//! - Repeated-character collapsing for words with no dictionary entry
//! - Levenshtein-based spelling suggestions

pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
