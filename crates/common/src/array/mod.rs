//! Sequence utilities
//!
//! Every function borrows its input and returns a new `Vec`; nothing here
//! reorders or mutates the caller's slice.

use rand::Rng;

use crate::error::{CommonError, CommonResult};

/// Uniformly random permutation of `items`
///
/// Uses the thread-local RNG. See [`shuffle_array_with`] to inject one.
#[must_use]
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_array_with(&mut rand::thread_rng(), items)
}

/// Fisher-Yates shuffle of a copy of `items`, walking from the end
pub fn shuffle_array_with<R: Rng + ?Sized, T: Clone>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Drop repeated values, keeping the first occurrence of each
///
/// Equality is `PartialEq`, so this is quadratic; it does not require
/// `Hash` or `Ord`.
///
/// ```
/// use awesome_common::array::remove_duplicates;
///
/// assert_eq!(remove_duplicates(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn remove_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Split `items` into consecutive chunks of at most `size` elements
///
/// # Errors
///
/// Returns `CommonError::InvalidInput` when `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> CommonResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(CommonError::invalid_input("size", "chunk size must be greater than zero"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Elements of `a` that are not in `b`, in `a`'s order
#[must_use]
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(*item)).cloned().collect()
}

/// Elements of `a` that are also in `b`, in `a`'s order
///
/// Duplicates in `a` are kept.
#[must_use]
pub fn intersect<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(*item)).cloned().collect()
}

/// Copy of `items` sorted ascending by the extracted key
///
/// The sort is stable. Keys that do not compare (NaN) are treated as equal.
///
/// ```
/// use awesome_common::array::sort_by_key;
///
/// let people = [("bo", 31), ("al", 25), ("cy", 25)];
/// let sorted = sort_by_key(&people, |p| p.1);
/// assert_eq!(sorted, vec![("al", 25), ("cy", 25), ("bo", 31)]);
/// ```
pub fn sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
