//! Test fixture generators
//!
//! Seeded random sources and sample JSON documents shared by unit tests,
//! integration tests and benches. Use the seeded variants whenever a test
//! asserts on the exact output of a randomized utility.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

/// Deterministic RNG for the `*_with` variants of randomized utilities
///
/// # Examples
///
/// ```
/// use awesome_common::number::random_number_with;
/// use awesome_common::testing::fixtures::seeded_rng;
///
/// let a = random_number_with(&mut seeded_rng(7), 1, 100);
/// let b = random_number_with(&mut seeded_rng(7), 1, 100);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a random integer vector of `len` items in `0..bound`
///
/// **Note:** This uses a non-deterministic RNG. For deterministic tests,
/// use [`random_ints_seeded`] instead.
#[must_use]
pub fn random_ints(len: usize, bound: i64) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..bound.max(1))).collect()
}

/// Generate a random integer vector with a seed (deterministic)
#[must_use]
pub fn random_ints_seeded(len: usize, bound: i64, seed: u64) -> Vec<i64> {
    let mut rng = seeded_rng(seed);
    (0..len).map(|_| rng.gen_range(0..bound.max(1))).collect()
}

/// Nested user profile document used across object utility tests
///
/// Contains nested objects, an array leaf, a `null` and falsy scalars.
#[must_use]
pub fn sample_profile() -> Value {
    json!({
        "id": 42,
        "name": "Ada",
        "active": false,
        "nickname": null,
        "address": {
            "city": "London",
            "geo": { "lat": 51.5, "lng": -0.12 }
        },
        "tags": ["admin", "ops"],
        "settings": {
            "theme": "dark",
            "notifications": { "email": true, "sms": false }
        }
    })
}

/// Build a nested object of the given depth and fan-out
///
/// Leaves are integers numbered in insertion order. Keys never contain `.`.
#[must_use]
pub fn nested_object(depth: usize, width: usize) -> Value {
    fn build(depth: usize, width: usize, counter: &mut i64) -> Value {
        let mut map = Map::new();
        for i in 0..width {
            let value = if depth == 0 {
                *counter += 1;
                Value::from(*counter)
            } else {
                build(depth - 1, width, counter)
            };
            map.insert(format!("k{i}"), value);
        }
        Value::Object(map)
    }

    let mut counter = 0;
    build(depth, width, &mut counter)
}
