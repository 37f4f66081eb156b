//! Spelling suggestion generation.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::CorrectionDictionary;
use crate::spelling::levenshtein::levenshtein_distance_threshold;

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum edit distance between the query and a rule key.
    pub max_distance: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig { max_distance: 2 }
    }
}

/// Generates correction suggestions by scanning the rule dictionary.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the default configuration.
    pub fn new() -> Self {
        SuggestionEngine {
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(config: SuggestionConfig) -> Self {
        SuggestionEngine { config }
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.config = config;
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Get suggestions for a potentially misspelled word.
    ///
    /// The query is lowercased. An exact rule hit comes first, followed by
    /// the corrections of every rule key within `max_distance` of the query,
    /// in the dictionary's key order. Duplicate correction values are
    /// suppressed, so two misspelling keys sharing a correction contribute
    /// one entry. The result may be empty; this never fails.
    pub fn suggest(&self, dictionary: &CorrectionDictionary, word: &str) -> Vec<String> {
        let query = word.to_lowercase();

        let mut suggestions = Vec::new();
        let mut seen = AHashSet::new();

        if let Some(correction) = dictionary.lookup(&query) {
            seen.insert(correction.to_string());
            suggestions.push(correction.to_string());
        }

        for (key, correction) in dictionary.entries() {
            if levenshtein_distance_threshold(&query, key, self.config.max_distance).is_some()
                && seen.insert(correction.to_string())
            {
                suggestions.push(correction.to_string());
            }
        }

        suggestions
    }
}
