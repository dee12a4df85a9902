//! Integration tests for the `array` module.
//!
//! Checks the sequence helpers against fixture data and each other.

#![cfg(feature = "foundation")]

use awesome_common::array::{
    chunk, difference, intersect, remove_duplicates, shuffle_array, shuffle_array_with,
    sort_by_key,
};
use awesome_common::testing::fixtures::{random_ints_seeded, seeded_rng};

/// Verifies a seeded shuffle is reproducible and a permutation.
#[test]
fn test_seeded_shuffle() {
    let items: Vec<u32> = (0..32).collect();
    let a = shuffle_array_with(&mut seeded_rng(1), &items);
    let b = shuffle_array_with(&mut seeded_rng(1), &items);
    assert_eq!(a, b);
    assert_ne!(a, items);

    let mut sorted = shuffle_array(&items);
    sorted.sort_unstable();
    assert_eq!(sorted, items);
}

/// Verifies dedup, difference and intersection partition the input.
#[test]
fn test_set_like_helpers_partition_input() {
    let values = random_ints_seeded(200, 50, 8);
    let unique = remove_duplicates(&values);
    assert_eq!(remove_duplicates(&unique), unique);

    let evens: Vec<i64> = (0..50).filter(|n| n % 2 == 0).collect();
    let kept = intersect(&unique, &evens);
    let dropped = difference(&unique, &evens);
    assert_eq!(kept.len() + dropped.len(), unique.len());
    assert!(kept.iter().all(|n| n % 2 == 0));
    assert!(dropped.iter().all(|n| n % 2 != 0));
}

/// Verifies chunking a sorted sequence.
#[test]
fn test_sort_then_chunk() {
    let records = vec![("eve", 29), ("bob", 35), ("amy", 29), ("dan", 41), ("cat", 22)];
    let by_age = sort_by_key(&records, |r| r.1);
    let names: Vec<&str> = by_age.iter().map(|r| r.0).collect();
    assert_eq!(names, vec!["cat", "eve", "amy", "bob", "dan"]);

    let pages = chunk(&by_age, 2).unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2], vec![("dan", 41)]);
    assert!(chunk(&by_age, 0).is_err());
}
