//! Command implementations for the typofix CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::{Command, CorrectArgs, SuggestArgs, TypofixArgs};
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::{AutoCorrector, CorrectionDictionary, SuggestionConfig};

/// Execute a CLI command.
pub fn execute_command(args: TypofixArgs) -> Result<()> {
    let mut dictionary = CorrectionDictionary::builtin();
    if let Some(rules_file) = &args.rules_file {
        if args.verbosity() > 1 {
            println!("Loading rules from: {}", rules_file.display());
        }
        dictionary.merge_from_file(rules_file)?;
    }

    match &args.command {
        Command::Correct(correct_args) => {
            correct_text(correct_args.clone(), dictionary, &args)
        }
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), dictionary, &args),
        Command::Rules => list_rules(dictionary, &args),
        Command::Session => run_session(dictionary, &args),
    }
}

/// Correct the given text, or stdin line by line when no text was given.
fn correct_text(
    args: CorrectArgs,
    dictionary: CorrectionDictionary,
    cli_args: &TypofixArgs,
) -> Result<()> {
    let corrector = AutoCorrector::with_dictionary(dictionary);

    match args.text {
        Some(text) => {
            let corrected = corrector.correct_text(&text);
            output_correction(
                &CorrectionOutput {
                    changed: corrected != text,
                    original: text,
                    corrected,
                },
                cli_args,
            )
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                println!("{}", corrector.correct_text(&line));
            }
            Ok(())
        }
    }
}

/// Print suggestions for a single word.
fn suggest_word(
    args: SuggestArgs,
    dictionary: CorrectionDictionary,
    cli_args: &TypofixArgs,
) -> Result<()> {
    let config = SuggestionConfig {
        max_distance: args.max_distance,
    };
    let corrector = AutoCorrector::with_config(dictionary, config);

    let suggestions = corrector.suggestions(&args.word);
    output_suggestions(
        &SuggestionsOutput {
            word: args.word,
            suggestions,
        },
        cli_args,
    )
}

/// List all correction rules, sorted by wrong form.
fn list_rules(dictionary: CorrectionDictionary, cli_args: &TypofixArgs) -> Result<()> {
    let rules: Vec<RuleEntry> = dictionary
        .rules()
        .into_iter()
        .map(|(wrong, correct)| RuleEntry { wrong, correct })
        .collect();
    let count = rules.len();

    output_rules(&RulesOutput { rules, count }, cli_args)
}

/// Run an interactive correction session on stdin.
///
/// Lines starting with a known command word are handled as commands; any
/// other line is corrected and echoed.
fn run_session(dictionary: CorrectionDictionary, cli_args: &TypofixArgs) -> Result<()> {
    let mut corrector = AutoCorrector::with_dictionary(dictionary);

    if cli_args.verbosity() > 0 {
        println!("=== Text Auto-Correct Session ===");
        println!("Enter text to correct (or 'exit' to quit):");
        println!("Commands:");
        println!("  'rules' - Display all correction rules");
        println!("  'add <wrong> <correct>' - Add custom rule");
        println!("  'suggest <word>' - Get suggestions for a word");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("rules") {
            list_rules(corrector.dictionary().clone(), cli_args)?;
            continue;
        }

        if let Some(rest) = input.strip_prefix("add ") {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            if let [wrong, correct] = parts.as_slice() {
                corrector.add_rule(wrong, correct);
                println!("Rule added: {wrong} -> {correct}");
            } else {
                println!("Usage: add <wrong> <correct>");
            }
            continue;
        }

        if let Some(word) = input.strip_prefix("suggest ") {
            let word = word.trim();
            output_suggestions(
                &SuggestionsOutput {
                    word: word.to_string(),
                    suggestions: corrector.suggestions(word),
                },
                cli_args,
            )?;
            continue;
        }

        let corrected = corrector.correct_text(input);
        if corrected != input {
            println!("Corrected: {corrected}");
        } else {
            println!("No corrections needed.");
        }
    }

    Ok(())
}
