//! End-to-end tests for the correction pipeline.

use typofix::spelling::{
    AutoCorrector, CorrectionDictionary, SuggestionConfig, levenshtein_distance,
};

#[test]
fn test_builtin_rules_correct_sentences() {
    let corrector = AutoCorrector::new();

    assert_eq!(
        corrector.correct_text("I beleive teh goverment shoudl listen"),
        "I believe the government should listen"
    );
    assert_eq!(
        corrector.correct_text("thier freind was definately wierd"),
        "their friend was definitely weird"
    );
}

#[test]
fn test_case_preservation_end_to_end() {
    let corrector = AutoCorrector::new();

    assert_eq!(corrector.correct_text("TEH"), "THE");
    assert_eq!(corrector.correct_text("Teh"), "The");
    assert_eq!(corrector.correct_text("teh"), "the");
    assert_eq!(corrector.correct_text("TEH Teh teh"), "THE The the");
}

#[test]
fn test_punctuation_preserved_around_corrections() {
    let corrector = AutoCorrector::new();

    assert_eq!(corrector.correct_text("teh,"), "the,");
    assert_eq!(corrector.correct_text("(adn)"), "(and)");
    assert_eq!(corrector.correct_text("\"Wierd!\""), "\"Weird!\"");
    assert_eq!(corrector.correct_text("--- teh ---"), "--- the ---");
}

#[test]
fn test_empty_input_unchanged() {
    let corrector = AutoCorrector::new();
    assert_eq!(corrector.correct_text(""), "");
}

#[test]
fn test_repeat_collapse_only_without_dictionary_hit() {
    let corrector = AutoCorrector::new();

    assert_eq!(corrector.correct_text("soooo"), "soo");
    assert_eq!(corrector.correct_text("ok"), "ok");
    // "tehhhh" is not a dictionary key; the whole core goes through the
    // repeat fixer rather than matching "teh" plus trailing noise
    assert_eq!(corrector.correct_text("tehhhh"), "tehh");
}

#[test]
fn test_whitespace_runs_collapse_to_single_spaces() {
    let corrector = AutoCorrector::new();

    assert_eq!(corrector.correct_text("teh   adn"), "the and");
    assert_eq!(corrector.correct_text("\tteh\n adn "), "the and");
}

#[test]
fn test_idempotence_on_clean_text() {
    let corrector = AutoCorrector::new();

    for text in [
        "the quick brown fox",
        "Hello, world!",
        "ALL CAPS TEXT",
        "numbers 123 stay 456",
    ] {
        let once = corrector.correct_text(text);
        let twice = corrector.correct_text(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_suggestions_exact_then_fuzzy() {
    let corrector = AutoCorrector::new();

    let suggestions = corrector.suggestions("teh");
    assert_eq!(suggestions.first().map(String::as_str), Some("the"));

    // "tehh" is distance 1 from the key "teh"
    let suggestions = corrector.suggestions("tehh");
    assert!(suggestions.contains(&"the".to_string()));

    assert!(corrector.suggestions("completelyunrelated").is_empty());
}

#[test]
fn test_suggestions_dedupe_shared_correction() {
    let mut dict = CorrectionDictionary::new();
    dict.insert("informatoin", "information");
    dict.insert("informaton", "information");
    let corrector = AutoCorrector::with_dictionary(dict);

    let suggestions = corrector.suggestions("informatin");
    assert_eq!(suggestions, vec!["information".to_string()]);
}

#[test]
fn test_add_rule_overwrite_stores_lowercase() {
    let mut corrector = AutoCorrector::new();

    corrector.add_rule("teh", "THEE");
    assert_eq!(corrector.dictionary().lookup("teh"), Some("thee"));

    // Case preserver still governs the output casing
    assert_eq!(corrector.correct_text("Teh"), "Thee");
}

#[test]
fn test_custom_rules_and_suggestion_distance() {
    let mut dict = CorrectionDictionary::new();
    dict.insert("qwikc", "quick");
    let corrector = AutoCorrector::with_config(dict, SuggestionConfig { max_distance: 1 });

    assert_eq!(corrector.correct_text("qwikc fox"), "quick fox");
    assert_eq!(corrector.suggestions("qwik"), vec!["quick".to_string()]);
    assert!(corrector.suggestions("qik").is_empty());
}

#[test]
fn test_levenshtein_reference_values() {
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(levenshtein_distance("", "abc"), 3);
    assert_eq!(levenshtein_distance("abc", "abc"), 0);
}

#[test]
fn test_rules_file_feeds_corrector() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut rules_file = NamedTempFile::new().unwrap();
    writeln!(rules_file, "# project-specific typos").unwrap();
    writeln!(rules_file, "paralel parallel").unwrap();
    writeln!(rules_file, "tokkenizer tokenizer").unwrap();
    rules_file.flush().unwrap();

    let dict = CorrectionDictionary::load_from_file(rules_file.path()).unwrap();
    let corrector = AutoCorrector::with_dictionary(dict);

    assert_eq!(
        corrector.correct_text("a paralel tokkenizer"),
        "a parallel tokenizer"
    );
}
