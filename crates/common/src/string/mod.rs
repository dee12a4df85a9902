//! String utilities
//!
//! Casing, truncation, slugs and a couple of permissive validators. Word
//! characters follow the ASCII definition (`[A-Za-z0-9_]`), so accented
//! letters count as separators in slugs and case conversions.

use once_cell::sync::Lazy;
use regex::Regex;

// Intentionally permissive: one `@`, at least one `.` after it, no whitespace.
#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[allow(clippy::expect_used)]
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("slug strip regex is valid"));

#[allow(clippy::expect_used)]
static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("slug separator regex is valid"));

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

#[allow(clippy::expect_used)]
static NON_KEBAB_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("kebab strip regex is valid"));

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Upper-case the first character, leave the rest unchanged
///
/// Empty input yields an empty string.
///
/// ```
/// use awesome_common::string::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut `s` to `max_len` characters and append `suffix`
///
/// Strings of at most `max_len` characters come back unchanged. The suffix
/// is not counted against `max_len`.
///
/// ```
/// use awesome_common::string::truncate_string;
///
/// assert_eq!(truncate_string("Hello, World!", 5, "..."), "Hello...");
/// ```
#[must_use]
pub fn truncate_string(s: &str, max_len: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &s[..cut], suffix),
        None => s.to_string(),
    }
}

/// [`truncate_string`] with the default `"..."` suffix
#[must_use]
pub fn truncate_string_default(s: &str, max_len: usize) -> String {
    truncate_string(s, max_len, "...")
}

/// Whether `s` looks like an email address
///
/// This is a shape check, not RFC 5322 validation.
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Whether `s` is non-empty and only ASCII letters and digits
#[must_use]
pub fn is_alpha_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Number of whitespace-separated words after trimming
///
/// An empty or all-whitespace string counts as one word: splitting the
/// trimmed empty string yields a single empty piece.
#[must_use]
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count().max(1)
}

/// URL slug: lowercase, stripped of punctuation, hyphen separated
///
/// ```
/// use awesome_common::string::to_slug;
///
/// assert_eq!(to_slug("Hello World!"), "hello-world");
/// assert_eq!(to_slug("  Test String  "), "test-string");
/// ```
#[must_use]
pub fn to_slug(s: &str) -> String {
    let lowered = s.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    SLUG_SEPARATORS.replace_all(&stripped, "-").into_owned()
}

/// kebab-case: whitespace runs become `-`, other punctuation is dropped
#[must_use]
pub fn to_kebab_case(s: &str) -> String {
    let lowered = s.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(lowered.trim(), "-");
    NON_KEBAB_CHARS.replace_all(&dashed, "").into_owned()
}

/// camelCase: lowercase, then every word start after the first is upper-cased
/// and whitespace removed
///
/// A word start is a word character preceded by a non-word character, so
/// `"foo-bar"` becomes `"foo-Bar"`.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut prev: Option<char> = None;

    for (i, c) in lowered.trim().chars().enumerate() {
        if c.is_whitespace() {
            prev = Some(c);
            continue;
        }
        let word_start = is_word_char(c) && !prev.is_some_and(is_word_char);
        if word_start && i > 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    //! Unit tests for string.
    use super::*;

    /// Validates `capitalize` on ASCII, empty and non-ASCII input.
    ///
    /// Assertions:
    /// - Confirms only the first character changes.
    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hELLO"), "HELLO");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("1abc"), "1abc");
    }

    /// Validates `truncate_string` boundaries.
    ///
    /// Assertions:
    /// - Confirms strings at the limit are untouched.
    /// - Confirms the suffix is appended past the limit.
    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string_default("Hello, World!", 5), "Hello...");
        assert_eq!(truncate_string_default("Short string", 50), "Short string");
        assert_eq!(truncate_string("abc", 3, "~"), "abc");
        assert_eq!(truncate_string("abcd", 3, "~"), "abc~");
        assert_eq!(truncate_string("héllo", 2, ""), "hé");
        assert_eq!(truncate_string("abc", 0, "..."), "...");
    }

    /// Validates `is_valid_email` against valid and invalid addresses.
    ///
    /// Assertions:
    /// - Ensures common addresses pass.
    /// - Ensures missing parts fail.
    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@missing-username.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("two@@example.com"));
    }

    /// Validates `to_slug` normalization.
    ///
    /// Assertions:
    /// - Confirms punctuation is stripped and separators collapsed.
    #[test]
    fn test_to_slug() {
        assert_eq!(to_slug("Hello World!"), "hello-world");
        assert_eq!(to_slug("  Test String  "), "test-string");
        assert_eq!(to_slug("Special @ Characters!!!"), "special-characters");
        assert_eq!(to_slug("snake_case -- value"), "snake-case-value");
        assert_eq!(to_slug(""), "");
    }

    /// Validates `to_kebab_case` and `to_camel_case`.
    ///
    /// Assertions:
    /// - Confirms spaces map to hyphens for kebab case.
    /// - Confirms word starts are upper-cased for camel case.
    #[test]
    fn test_case_conversions() {
        assert_eq!(to_kebab_case("Hello World"), "hello-world");
        assert_eq!(to_kebab_case("  Rust  is Fun! "), "rust-is-fun");
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("Hello Big   World"), "helloBigWorld");
        assert_eq!(to_camel_case("foo-bar"), "foo-Bar");
        assert_eq!(to_camel_case(""), "");
    }

    /// Validates `count_words`, including the empty-string boundary.
    ///
    /// Assertions:
    /// - Confirms whitespace runs count as one separator.
    /// - Confirms empty input counts as one word.
    #[test]
    fn test_count_words() {
        assert_eq!(count_words("one two  three"), 3);
        assert_eq!(count_words("  padded\tand\nsplit  "), 3);
        assert_eq!(count_words("single"), 1);
        assert_eq!(count_words(""), 1);
        assert_eq!(count_words("    "), 1);
    }

    /// Validates `is_alpha_numeric`.
    ///
    /// Assertions:
    /// - Ensures mixed-case letters and digits pass, anything else fails.
    #[test]
    fn test_is_alpha_numeric() {
        assert!(is_alpha_numeric("abc123XYZ"));
        assert!(!is_alpha_numeric("abc 123"));
        assert!(!is_alpha_numeric(""));
        assert!(!is_alpha_numeric("under_score"));
    }
}
