//! Token decomposition and word-shape helpers for the corrector.

/// A whitespace-delimited token split into its punctuation shell and core.
///
/// `prefix + core + suffix` always reconstructs the original token exactly.
/// An all-punctuation token has an empty core (and an empty suffix, since the
/// prefix scan consumes everything).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Leading non-alphanumeric characters.
    pub prefix: &'a str,
    /// Maximal alphanumeric-bounded substring.
    pub core: &'a str,
    /// Trailing non-alphanumeric characters.
    pub suffix: &'a str,
}

/// Split a token into leading punctuation, core word, and trailing
/// punctuation. Letters and digits (Unicode classes) bound the core.
pub fn split_token(token: &str) -> TokenParts<'_> {
    let start = token
        .find(|c: char| c.is_alphanumeric())
        .unwrap_or(token.len());
    let (prefix, rest) = token.split_at(start);

    let end = match rest.rfind(|c: char| c.is_alphanumeric()) {
        Some(i) => i + rest[i..].chars().next().map_or(0, char::len_utf8),
        None => 0,
    };
    let (core, suffix) = rest.split_at(end);

    TokenParts {
        prefix,
        core,
        suffix,
    }
}

/// The case pattern of a word, derived at correction time and re-applied to
/// the replacement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// The word equals its own uppercase form. Also matches single uppercase
    /// letters and words without letters; accepted behavior.
    Upper,
    /// First character uppercase.
    Capitalized,
    /// Everything else.
    Lower,
}

impl CaseStyle {
    /// Classify the case pattern of a word. Checked in order: full upper,
    /// then capitalized, then lower.
    pub fn detect(word: &str) -> Self {
        if word == word.to_uppercase() {
            CaseStyle::Upper
        } else if word.chars().next().is_some_and(char::is_uppercase) {
            CaseStyle::Capitalized
        } else {
            CaseStyle::Lower
        }
    }

    /// Apply this case pattern to a replacement word.
    pub fn apply(self, replacement: &str) -> String {
        match self {
            CaseStyle::Upper => replacement.to_uppercase(),
            CaseStyle::Capitalized => {
                let mut chars = replacement.chars();
                match chars.next() {
                    Some(first) => {
                        let mut result: String = first.to_uppercase().collect();
                        result.push_str(&chars.as_str().to_lowercase());
                        result
                    }
                    None => String::new(),
                }
            }
            CaseStyle::Lower => replacement.to_lowercase(),
        }
    }
}

/// Re-apply the case pattern of `original` to `replacement`.
///
/// If either side is empty the replacement is returned unchanged.
pub fn preserve_case(original: &str, replacement: &str) -> String {
    if original.is_empty() || replacement.is_empty() {
        return replacement.to_string();
    }
    CaseStyle::detect(original).apply(replacement)
}

/// Collapse runs of three or more identical consecutive characters down to
/// two. Words shorter than three characters pass through unchanged.
///
/// This is the fallback heuristic for words with no dictionary entry; it is
/// never stacked on top of a dictionary correction.
pub fn collapse_repeats(word: &str) -> String {
    if word.chars().count() < 3 {
        return word.to_string();
    }

    let mut result = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for ch in word.chars() {
        if prev == Some(ch) {
            run += 1;
            if run <= 2 {
                result.push(ch);
            }
        } else {
            result.push(ch);
            prev = Some(ch);
            run = 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token_plain_word() {
        let parts = split_token("hello");
        assert_eq!(parts.prefix, "");
        assert_eq!(parts.core, "hello");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn test_split_token_punctuation_shell() {
        let parts = split_token("(hello),");
        assert_eq!(parts.prefix, "(");
        assert_eq!(parts.core, "hello");
        assert_eq!(parts.suffix, "),");
    }

    #[test]
    fn test_split_token_all_punctuation() {
        let parts = split_token("---");
        assert_eq!(parts.prefix, "---");
        assert_eq!(parts.core, "");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn test_split_token_reconstructs_exactly() {
        for token in ["", "a", "...", "\"teh!\"", "it's", "x1!", "¿qué?"] {
            let parts = split_token(token);
            let rebuilt = format!("{}{}{}", parts.prefix, parts.core, parts.suffix);
            assert_eq!(rebuilt, token);
        }
    }

    #[test]
    fn test_split_token_keeps_internal_punctuation() {
        let parts = split_token("don't!");
        assert_eq!(parts.prefix, "");
        assert_eq!(parts.core, "don't");
        assert_eq!(parts.suffix, "!");
    }

    #[test]
    fn test_case_style_detection() {
        assert_eq!(CaseStyle::detect("WORD"), CaseStyle::Upper);
        assert_eq!(CaseStyle::detect("Word"), CaseStyle::Capitalized);
        assert_eq!(CaseStyle::detect("word"), CaseStyle::Lower);
        assert_eq!(CaseStyle::detect("wOrD"), CaseStyle::Lower);
        // Uppercase-equal trivially: single letters and digit-only words
        assert_eq!(CaseStyle::detect("A"), CaseStyle::Upper);
        assert_eq!(CaseStyle::detect("123"), CaseStyle::Upper);
    }

    #[test]
    fn test_preserve_case() {
        assert_eq!(preserve_case("TEH", "the"), "THE");
        assert_eq!(preserve_case("Teh", "the"), "The");
        assert_eq!(preserve_case("teh", "the"), "the");
        assert_eq!(preserve_case("Teh", "tHE"), "The");
        assert_eq!(preserve_case("", "the"), "the");
        assert_eq!(preserve_case("teh", ""), "");
    }

    #[test]
    fn test_collapse_repeats() {
        assert_eq!(collapse_repeats("soooo"), "soo");
        assert_eq!(collapse_repeats("aaa"), "aa");
        assert_eq!(collapse_repeats("ok"), "ok");
        assert_eq!(collapse_repeats("aa"), "aa");
        assert_eq!(collapse_repeats("hello"), "hello");
        assert_eq!(collapse_repeats("tehhhh"), "tehh");
        assert_eq!(collapse_repeats("aaabbbccc"), "aabbcc");
    }

    #[test]
    fn test_collapse_repeats_run_resets_on_change() {
        assert_eq!(collapse_repeats("aabaa"), "aabaa");
        assert_eq!(collapse_repeats("aaabaaa"), "aabaa");
    }
}
