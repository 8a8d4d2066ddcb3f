//! Text normalization for fuzzy comparison.
//!
//! Two shapes of the same text are used by the match cascade:
//!
//! - [`normalize`]: lower-cased with every whitespace character removed,
//!   so `"Pinot  Noir"` and `"pinotnoir"` compare equal
//! - [`split_words`]: lower-cased and split on whitespace, for the
//!   word-level pass
//!
//! Both fold case one `char` at a time with `char::to_lowercase`, which is
//! locale-free and context-free, so a word and its normalized form always
//! agree. No other Unicode normalization is applied.

/// Lower-case `text` and drop every Unicode whitespace character.
///
/// ```rust
/// use fuzzy::normalize;
///
/// assert_eq!(normalize("  Cabernet\tSauvignon \n"), "cabernetsauvignon");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    fold_case(text.chars().filter(|c| !c.is_whitespace()))
}

/// Lower-case `text` and split it into whitespace-separated words.
///
/// Empty segments produced by leading, trailing or repeated whitespace are
/// skipped.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| fold_case(word.chars()))
        .collect()
}

// `str::to_lowercase` applies the Greek final-sigma rule; per-char folding does not.
fn fold_case(chars: impl Iterator<Item = char>) -> String {
    chars.flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_removes_all_whitespace_kinds() {
        let cases = [
            ("Pinot Noir", "pinotnoir"),
            ("Pinot\u{00A0}Noir", "pinotnoir"),
            ("\r\nPINOT\t\tnoir  ", "pinotnoir"),
            ("", ""),
            ("\n\t ", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn normalize_folds_non_ascii_case() {
        assert_eq!(normalize("Grüner VELTLINER"), "grünerveltliner");
        assert_eq!(normalize("ÉCHÉZEAUX"), "échézeaux");
    }

    #[test]
    fn split_words_lowercases_and_skips_empties() {
        assert_eq!(
            split_words("  Châteauneuf-du-Pape   Rouge "),
            vec!["châteauneuf-du-pape", "rouge"]
        );
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn words_fold_like_normalize() {
        assert_eq!(split_words("ΟΔΟΣ"), vec![normalize("ΟΔΟΣ")]);
        assert_eq!(split_words("ΟΔΟΣ"), vec!["οδοσ"]);
    }
}
