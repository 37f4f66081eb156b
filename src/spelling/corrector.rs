//! Main auto-corrector that ties the correction pipeline together.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::CorrectionDictionary;
use crate::spelling::suggest::{SuggestionConfig, SuggestionEngine};
use crate::spelling::token::{collapse_repeats, preserve_case, split_token};

/// Statistics about the corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of rules in the dictionary.
    pub rule_count: usize,
}

/// Dictionary-based text auto-corrector.
///
/// Owns the rule dictionary and a suggestion engine. Every operation is a
/// pure function of its input plus the current dictionary contents; nothing
/// here performs I/O or fails.
#[derive(Debug, Clone)]
pub struct AutoCorrector {
    dictionary: CorrectionDictionary,
    engine: SuggestionEngine,
}

impl AutoCorrector {
    /// Create a corrector seeded with the built-in rule set.
    pub fn new() -> Self {
        AutoCorrector {
            dictionary: CorrectionDictionary::builtin(),
            engine: SuggestionEngine::new(),
        }
    }

    /// Create a corrector with a custom dictionary.
    pub fn with_dictionary(dictionary: CorrectionDictionary) -> Self {
        AutoCorrector {
            dictionary,
            engine: SuggestionEngine::new(),
        }
    }

    /// Create a corrector with a custom dictionary and suggestion config.
    pub fn with_config(dictionary: CorrectionDictionary, config: SuggestionConfig) -> Self {
        AutoCorrector {
            dictionary,
            engine: SuggestionEngine::with_config(config),
        }
    }

    /// Correct all words in a text.
    ///
    /// The text is split on runs of whitespace, each token is corrected
    /// independently, and the results are joined with single spaces. Empty
    /// input comes back unchanged.
    pub fn correct_text(&self, text: &str) -> String {
        if text.is_empty() {
            return text.to_string();
        }

        text.split_whitespace()
            .map(|token| self.correct_word(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Correct a single whitespace-delimited token.
    ///
    /// Leading and trailing punctuation is preserved around the corrected
    /// core; the core's case pattern is re-applied to the replacement. An
    /// all-punctuation token passes through verbatim.
    fn correct_word(&self, token: &str) -> String {
        let parts = split_token(token);
        if parts.core.is_empty() {
            return token.to_string();
        }

        let lower = parts.core.to_lowercase();
        let corrected = match self.dictionary.lookup(&lower) {
            Some(correction) => correction.to_string(),
            None => {
                // Fallback heuristic, never stacked with a dictionary hit.
                // The whitespace collapse mirrors the original pipeline; a
                // core cannot contain whitespace, so it is a no-op here.
                let fixed = collapse_repeats(parts.core);
                fixed.split_whitespace().collect::<Vec<_>>().join(" ")
            }
        };

        let cased = preserve_case(parts.core, &corrected);
        format!("{}{}{}", parts.prefix, cased, parts.suffix)
    }

    /// Get correction suggestions for a single word.
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        self.engine.suggest(&self.dictionary, word)
    }

    /// Add a correction rule, overwriting any existing rule for the same
    /// (lowercased) wrong form. The correction is stored lowercased.
    pub fn add_rule(&mut self, wrong: &str, correct: &str) {
        self.dictionary.insert(wrong, correct);
    }

    /// Get a snapshot of all rules, sorted by wrong form.
    pub fn rules(&self) -> Vec<(String, String)> {
        self.dictionary.rules()
    }

    /// Access the underlying dictionary.
    pub fn dictionary(&self) -> &CorrectionDictionary {
        &self.dictionary
    }

    /// Get statistics about the corrector.
    pub fn stats(&self) -> CorrectorStats {
        CorrectorStats {
            rule_count: self.dictionary.len(),
        }
    }
}

impl Default for AutoCorrector {
    fn default() -> Self {
        Self::new()
    }
}
