//! Label to identifier normalization.
//!
//! Turns free-form captions ("Status Reason [DEPRECATED]", "5 - 10 Days",
//! "C++") into identifiers that are legal in the generated sources. The
//! pipeline is a fixed sequence of rewrites; every step only ever removes
//! characters or replaces them with ASCII word characters and whitespace, and
//! the final step drops the whitespace, so the output is made of `[0-9A-Za-z_]`.
//!
//! Word characters are ASCII only. Any other letter is treated like
//! punctuation and becomes a word separator.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{CoreError, Result};

/// Bracketed markers such as `[DEPRECATED]`.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]").expect("Invalid bracket regex"));

static LEADING_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^0-9A-Za-z_]+").expect("Invalid leading regex"));

/// Trailing junk, keeping sign characters so they can be spelled out.
static TRAILING_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_+\-]+$").expect("Invalid trailing regex"));

static QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]"#).expect("Invalid quote regex"));

static NON_WORD_NON_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s]").expect("Invalid separator regex"));

static DIGITS_THEN_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s+").expect("Invalid digit run regex"));

static SPACE_THEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([0-9]+)").expect("Invalid digit run regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static LEGAL_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][0-9A-Za-z_$]*$").expect("Invalid identifier regex")
});

/// Returns true if `value` is usable as an identifier in generated sources.
pub fn is_legal_identifier(value: &str) -> bool {
    LEGAL_IDENTIFIER.is_match(value)
}

/// Derive an identifier from a human label.
///
/// Returns `fallback` when the label is absent, empty, or normalizes to
/// nothing. A result starting with a digit is prefixed with `_`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidFallback`] when `fallback` is empty or not a
/// legal identifier, regardless of the label.
///
/// # Example
///
/// ```
/// use ceg_core::normalize_label;
///
/// assert_eq!(normalize_label(Some("Status Reason"), "statuscode").unwrap(), "StatusReason");
/// assert_eq!(normalize_label(Some("5 - 10 Days"), "range").unwrap(), "_5_10_Days");
/// assert_eq!(normalize_label(None, "statuscode").unwrap(), "statuscode");
/// ```
pub fn normalize_label(label: Option<&str>, fallback: &str) -> Result<String> {
    check_fallback(fallback)?;

    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return Ok(fallback.to_string());
    };

    let result = normalize_words(label);
    if result.is_empty() {
        return Ok(fallback.to_string());
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(format!("_{result}"));
    }
    Ok(result)
}

fn check_fallback(fallback: &str) -> Result<()> {
    if fallback.is_empty() {
        return Err(CoreError::InvalidFallback {
            fallback: fallback.to_string(),
            reason: "fallback must not be empty",
        });
    }
    if !is_legal_identifier(fallback) {
        return Err(CoreError::InvalidFallback {
            fallback: fallback.to_string(),
            reason: "fallback must be a legal identifier",
        });
    }
    Ok(())
}

fn normalize_words(label: &str) -> String {
    let value = BRACKETED.replace_all(label, "_${1}_");
    let value = LEADING_NON_WORD.replace(&value, "");
    let value = TRAILING_NON_WORD.replace(&value, "");
    let value = QUOTES.replace_all(&value, "");
    let value = spell_trailing_signs(&value, '-', "Minus");
    let value = spell_trailing_signs(&value, '+', "Plus");
    let value = NON_WORD_NON_SPACE.replace_all(&value, " ");
    let value = capitalize_words(&value);
    let value = join_digits_forward(&value);
    let value = join_digits_backward(&value);
    WHITESPACE.replace_all(&value, "").into_owned()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every `sign` that has no word character after it with `word`, one
/// word per sign, so `C-` and `C--` stay distinct.
fn spell_trailing_signs(value: &str, sign: char, word: &str) -> String {
    let tail_start = value.rfind(is_word_char).map_or(0, |index| index + 1);
    let (head, tail) = value.split_at(tail_start);

    let mut out = String::with_capacity(value.len() + word.len());
    out.push_str(head);
    for c in tail.chars() {
        if c == sign {
            out.push_str(word);
        } else {
            out.push(c);
        }
    }
    out
}

/// Upper-case the first character of every word, leaving the rest untouched.
fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_word = false;
    for c in value.chars() {
        let is_word = is_word_char(c);
        if is_word && !previous_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        previous_is_word = is_word;
    }
    out
}

/// `5 10 Days` becomes `5_10_Days`: whitespace after a number turns into `_`
/// when a word follows.
fn join_digits_forward(value: &str) -> String {
    DIGITS_THEN_SPACE
        .replace_all(value, |caps: &Captures<'_>| {
            let end = caps.get(0).map_or(value.len(), |m| m.end());
            if value[end..].starts_with(is_word_char) {
                format!("{}_", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// `Foo 5_10` becomes `Foo_5_10`: whitespace before a number turns into `_`
/// when a word precedes it.
fn join_digits_backward(value: &str) -> String {
    SPACE_THEN_DIGITS
        .replace_all(value, |caps: &Captures<'_>| {
            let start = caps.get(0).map_or(0, |m| m.start());
            if value[..start].ends_with(is_word_char) {
                format!("_{}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(label: &str) -> String {
        normalize_label(Some(label), "Fallback").unwrap()
    }

    #[test]
    fn test_plain_words_are_pascal_cased() {
        assert_eq!(normalize("Active"), "Active");
        assert_eq!(normalize("account name"), "AccountName");
        assert_eq!(normalize("Status Reason"), "StatusReason");
        assert_eq!(normalize("already camelCase"), "AlreadyCamelCase");
    }

    #[test]
    fn test_absent_or_empty_label_returns_fallback() {
        assert_eq!(normalize_label(None, "Foo").unwrap(), "Foo");
        assert_eq!(normalize_label(Some(""), "Foo").unwrap(), "Foo");
    }

    #[test]
    fn test_label_without_word_characters_returns_fallback() {
        assert_eq!(normalize("   "), "Fallback");
        assert_eq!(normalize("!!!"), "Fallback");
        assert_eq!(normalize("\"\""), "Fallback");
    }

    #[test]
    fn test_brackets_keep_their_content() {
        assert_eq!(normalize("Status [DEPRECATED]"), "Status_DEPRECATED_");
        assert_eq!(normalize("[OBSOLETE] Old Value"), "_OBSOLETE_OldValue");
    }

    #[test]
    fn test_leading_and_trailing_punctuation_is_stripped() {
        assert_eq!(normalize("  --leading"), "Leading");
        assert_eq!(normalize("(Optional)"), "Optional");
        assert_eq!(normalize("Done."), "Done");
    }

    #[test]
    fn test_quotes_are_removed() {
        assert_eq!(normalize("It's done"), "ItsDone");
        assert_eq!(normalize("Say \"Hi\" now"), "SayHiNow");
    }

    #[test]
    fn test_trailing_signs_are_spelled_out() {
        assert_eq!(normalize("A+"), "APlus");
        assert_eq!(normalize("C++"), "CPlusPlus");
        assert_eq!(normalize("Rh--"), "RhMinusMinus");
        assert_ne!(normalize("C-"), normalize("C--"));
        assert_eq!(normalize("Rh-"), "RhMinus");
        assert_eq!(normalize("Temperature -"), "TemperatureMinus");
        assert_eq!(normalize("Grade - +"), "GradeMinusPlus");
    }

    #[test]
    fn test_inner_signs_become_separators() {
        assert_eq!(normalize("e-mail"), "EMail");
        assert_eq!(normalize("Phone/Fax"), "PhoneFax");
        assert_eq!(normalize("A+B"), "AB");
    }

    #[test]
    fn test_numbers_stay_separated() {
        assert_eq!(normalize("Foo 5,10,20 Bar"), "Foo_5_10_20_Bar");
        assert_eq!(normalize("5 10 20"), "_5_10_20");
        assert_eq!(normalize("Net 30"), "Net_30");
        assert_eq!(normalize("Top10"), "Top10");
    }

    #[test]
    fn test_leading_digit_gets_underscore() {
        assert_eq!(normalize("123 Test"), "_123_Test");
        assert_eq!(normalize("100%"), "_100");
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        let value = normalize("Größe");
        assert!(is_legal_identifier(&value), "{value}");
        assert!(value.starts_with("Gr"));
    }

    #[test]
    fn test_invalid_fallback_is_rejected() {
        assert!(matches!(
            normalize_label(Some("x"), ""),
            Err(CoreError::InvalidFallback { .. })
        ));
        assert!(matches!(
            normalize_label(Some("x"), "1bad"),
            Err(CoreError::InvalidFallback { .. })
        ));
        assert!(matches!(
            normalize_label(None, "has space"),
            Err(CoreError::InvalidFallback { .. })
        ));
    }

    #[test]
    fn test_legal_identifier_pattern() {
        assert!(is_legal_identifier("Name"));
        assert!(is_legal_identifier("_3"));
        assert!(is_legal_identifier("$scope"));
        assert!(!is_legal_identifier(""));
        assert!(!is_legal_identifier("3d"));
        assert!(!is_legal_identifier("a-b"));
    }
}
