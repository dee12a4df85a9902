//! Integration tests for the `string` module.
//!
//! Covers casing, slugs, truncation and validators together on realistic
//! titles and addresses.

#![cfg(feature = "foundation")]

use awesome_common::string::{
    capitalize, count_words, is_alpha_numeric, is_valid_email, to_camel_case, to_kebab_case,
    to_slug, truncate_string, truncate_string_default,
};

/// Verifies slug and kebab conversions agree on plain titles.
#[test]
fn test_slug_and_kebab_on_titles() {
    let titles = [
        ("Hello World!", "hello-world"),
        ("  Test String  ", "test-string"),
        ("Rust 2024: What's New", "rust-2024-whats-new"),
    ];
    for (title, expected) in titles {
        assert_eq!(to_slug(title), expected, "slug mismatch for {title}");
        assert_eq!(to_kebab_case(title), expected, "kebab mismatch for {title}");
    }
}

/// Verifies camel case and capitalization together.
#[test]
fn test_camel_case_and_capitalize() {
    assert_eq!(to_camel_case("user account id"), "userAccountId");
    assert_eq!(capitalize(&to_camel_case("user account id")), "UserAccountId");
    assert_eq!(capitalize("über"), "Über");
}

/// Verifies truncation keeps character boundaries.
#[test]
fn test_truncation_on_multibyte_text() {
    let text = "naïve café au lait";
    assert_eq!(truncate_string_default(text, 10), "naïve café...");
    assert_eq!(truncate_string(text, 5, " →"), "naïve →");
    assert_eq!(truncate_string(text, 100, "..."), text);
}

/// Verifies validators on a mixed batch.
#[test]
fn test_validators_on_batch() {
    let inputs = ["ops@example.com", "not-an-email", "a@b.c", "x@y"];
    let valid: Vec<&str> = inputs.iter().copied().filter(|s| is_valid_email(s)).collect();
    assert_eq!(valid, vec!["ops@example.com", "a@b.c"]);

    assert!(is_alpha_numeric("Order66"));
    assert!(!is_alpha_numeric("Order-66"));
    assert_eq!(count_words("the quick  brown\tfox"), 4);
}
