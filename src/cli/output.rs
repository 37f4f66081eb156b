//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TypofixArgs};
use crate::error::Result;

/// Result structure for text correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub original: String,
    pub corrected: String,
    pub changed: bool,
}

/// Result structure for word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsOutput {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// A single correction rule for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleEntry {
    pub wrong: String,
    pub correct: String,
}

/// Result structure for rule listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct RulesOutput {
    pub rules: Vec<RuleEntry>,
    pub count: usize,
}

/// Output a correction result in the configured format.
pub fn output_correction(result: &CorrectionOutput, args: &TypofixArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if result.changed {
                println!("Corrected: {}", result.corrected);
            } else {
                println!("No corrections needed.");
            }
            Ok(())
        }
    }
}

/// Output word suggestions in the configured format.
pub fn output_suggestions(result: &SuggestionsOutput, args: &TypofixArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if result.suggestions.is_empty() {
                println!("No suggestions found for: {}", result.word);
            } else {
                let joined = result.suggestions.join(", ");
                println!("Suggestions for '{}': {joined}", result.word);
            }
            Ok(())
        }
    }
}

/// Output the rule listing in the configured format.
pub fn output_rules(result: &RulesOutput, args: &TypofixArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("=== Correction Rules ===");
            for rule in &result.rules {
                println!("{} -> {}", rule.wrong, rule.correct);
            }
            if args.verbosity() > 1 {
                println!("{} rules", result.count);
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TypofixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
