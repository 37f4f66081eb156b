//! Correction rule dictionary.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Result;

/// Built-in correction rules covering common English misspellings.
///
/// Both sides are lowercase; the corrector restores the original word's case
/// at substitution time.
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("teh", "the"),
    ("adn", "and"),
    ("recieve", "receive"),
    ("beleive", "believe"),
    ("occured", "occurred"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("adress", "address"),
    ("begining", "beginning"),
    ("calender", "calendar"),
    ("commited", "committed"),
    ("concious", "conscious"),
    ("enviroment", "environment"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("neccessary", "necessary"),
    ("occassion", "occasion"),
    ("untill", "until"),
    ("wierd", "weird"),
    ("thier", "their"),
    ("freind", "friend"),
    ("woudl", "would"),
    ("coudl", "could"),
    ("shoudl", "should"),
];

/// A dictionary mapping misspelled word forms to their corrections.
///
/// Keys and values are stored lowercase. The backing map is a `BTreeMap`, so
/// iteration order is lexicographic by key; the suggestion engine relies on
/// this being a fixed, deterministic order.
#[derive(Debug, Clone, Default)]
pub struct CorrectionDictionary {
    rules: BTreeMap<String, String>,
}

impl CorrectionDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        CorrectionDictionary {
            rules: BTreeMap::new(),
        }
    }

    /// Create a dictionary seeded with the built-in rule set.
    pub fn builtin() -> Self {
        let mut dict = CorrectionDictionary::new();
        for (wrong, correct) in BUILTIN_RULES {
            dict.insert(wrong, correct);
        }
        dict
    }

    /// Add a correction rule, overwriting any existing rule for the same key.
    ///
    /// The key is lowercased, and so is the stored correction; case is
    /// restored from the original word at correction time.
    pub fn insert(&mut self, wrong: &str, correct: &str) {
        self.rules
            .insert(wrong.to_lowercase(), correct.to_lowercase());
    }

    /// Look up the correction for an already-lowercased word form.
    ///
    /// This is an exact key match; callers are expected to lowercase first.
    pub fn lookup(&self, lower_word: &str) -> Option<&str> {
        self.rules.get(lower_word).map(|s| s.as_str())
    }

    /// Check whether a rule exists for the given (lowercased) word form.
    pub fn contains(&self, lower_word: &str) -> bool {
        self.rules.contains_key(lower_word)
    }

    /// Iterate over all rules in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get a snapshot of all rules, sorted by key.
    pub fn rules(&self) -> Vec<(String, String)> {
        self.rules
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the dictionary has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Load rules from a text file with one `wrong correct` pair per line.
    ///
    /// Blank lines and lines starting with `#` are skipped; lines without at
    /// least two whitespace-separated fields are ignored.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dict = CorrectionDictionary::new();
        dict.merge_from_file(path)?;
        Ok(dict)
    }

    /// Read rules from a file into this dictionary, overwriting on key clash.
    pub fn merge_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            if let (Some(wrong), Some(correct)) = (parts.next(), parts.next()) {
                self.insert(wrong, correct);
            }
        }

        Ok(())
    }

    /// Save all rules to a text file, one `wrong correct` pair per line.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        for (wrong, correct) in &self.rules {
            writeln!(file, "{wrong} {correct}")?;
        }
        Ok(())
    }
}
