//! JSON object utilities
//!
//! Generic key-value objects are [`serde_json::Map`]s (aliased as
//! [`Object`]) with insertion order preserved, and nested data is a
//! [`serde_json::Value`].
//!
//! Most functions borrow their inputs and return new values. The exceptions
//! take `&mut` and change the caller's data in place:
//!
//! | Function | Mutates |
//! |----------|---------|
//! | [`merge_objects`] | no, returns a new object |
//! | [`merge_deep`] | yes, the target |
//! | [`set_nested_value`] | yes, the target |
//! | [`freeze_object`] | consumes the value |
//!
//! # Limitations
//!
//! - [`deep_clone`] round-trips through JSON, so anything JSON cannot express
//!   (non-string map keys, NaN floats, skipped fields) is lost or rejected.
//!   Owned values cannot form reference cycles, so there is no cycle case.
//! - [`flatten_object`] joins keys with `.`. Keys that already contain a `.`
//!   do not survive an [`unflatten_object`] round trip.
//! - [`invert_object`] and [`unflatten_object`] resolve collisions by
//!   iteration order: the last writer wins.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::CommonResult;

/// Insertion-ordered JSON object
pub type Object = Map<String, Value>;

// -----------------------------------------------------------------------------
// Cloning and merging
// -----------------------------------------------------------------------------

/// Structural copy through a JSON round trip
///
/// # Errors
///
/// Returns `CommonError::Serialization` when `value` cannot be represented
/// as JSON or the JSON cannot be read back as `T`.
///
/// ```
/// use awesome_common::object::deep_clone;
/// use serde_json::json;
///
/// let original = json!({ "a": 1, "b": { "c": 2 } });
/// let copy = deep_clone(&original).unwrap();
/// assert_eq!(copy, original);
/// ```
pub fn deep_clone<T>(value: &T) -> CommonResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_value(value)?;
    Ok(serde_json::from_value(encoded)?)
}

/// Shallow merge into a new object; `source` keys win
#[must_use]
pub fn merge_objects(target: &Object, source: &Object) -> Object {
    let mut merged = target.clone();
    for (key, value) in source {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Recursively merge `source` into `target`, in place
///
/// Where both sides hold an object the merge recurses. Anything else in
/// `source` (scalars, arrays, `null`) replaces what `target` had. The same
/// rule applies at the root: a non-object on either side means `target`
/// becomes a copy of `source`.
///
/// Returns `target` for chaining.
///
/// ```
/// use awesome_common::object::merge_deep;
/// use serde_json::json;
///
/// let mut target = json!({ "a": { "b": 1 } });
/// merge_deep(&mut target, &json!({ "a": { "c": 2 }, "d": 3 }));
/// assert_eq!(target, json!({ "a": { "b": 1, "c": 2 }, "d": 3 }));
/// ```
pub fn merge_deep<'a>(target: &'a mut Value, source: &Value) -> &'a mut Value {
    match (&mut *target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            merge_maps(target_map, source_map);
        }
        _ => *target = source.clone(),
    }
    target
}

fn merge_maps(target: &mut Object, source: &Object) {
    for (key, incoming) in source {
        let both_objects = incoming.is_object() && target.get(key).is_some_and(Value::is_object);
        if both_objects {
            if let (Some(Value::Object(existing)), Value::Object(nested)) =
                (target.get_mut(key), incoming)
            {
                merge_maps(existing, nested);
            }
        } else {
            target.insert(key.clone(), incoming.clone());
        }
    }
}

// -----------------------------------------------------------------------------
// Keys, values and selection
// -----------------------------------------------------------------------------

/// Keys in insertion order
#[must_use]
pub fn get_object_keys(obj: &Object) -> Vec<String> {
    obj.keys().cloned().collect()
}

/// Values in insertion order
#[must_use]
pub fn get_object_values(obj: &Object) -> Vec<Value> {
    obj.values().cloned().collect()
}

/// `(key, value)` pairs in insertion order
#[must_use]
pub fn to_entries(obj: &Object) -> Vec<(String, Value)> {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// New object with only the listed keys, in the order listed
///
/// Keys missing from `obj` are skipped.
#[must_use]
pub fn pick(obj: &Object, keys: &[&str]) -> Object {
    keys.iter()
        .filter_map(|key| obj.get(*key).map(|value| ((*key).to_string(), value.clone())))
        .collect()
}

/// New object without the listed keys, in `obj`'s order
#[must_use]
pub fn omit(obj: &Object, keys: &[&str]) -> Object {
    obj.iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// No own keys
#[must_use]
pub fn is_empty_object(obj: &Object) -> bool {
    obj.is_empty()
}

/// `key` is an own key of `obj`
#[must_use]
pub fn has_key(obj: &Object, key: &str) -> bool {
    obj.contains_key(key)
}

/// The value is a JSON object (not an array, not `null`)
#[must_use]
pub const fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Apply `f` to every value, keeping keys
pub fn map_object<F>(obj: &Object, mut f: F) -> Object
where
    F: FnMut(&Value, &str) -> Value,
{
    obj.iter().map(|(k, v)| (k.clone(), f(v, k))).collect()
}

/// Keep entries for which `predicate` holds
pub fn filter_object<F>(obj: &Object, mut predicate: F) -> Object
where
    F: FnMut(&Value, &str) -> bool,
{
    obj.iter().filter(|(k, v)| predicate(v, k)).map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Drop `null` entries; `false`, `0` and `""` stay
#[must_use]
pub fn compact_object(obj: &Object) -> Object {
    filter_object(obj, |value, _| !value.is_null())
}

/// Rename keys through `mapping`; unmapped keys are kept as they are
///
/// An empty replacement name counts as unmapped.
#[must_use]
pub fn rename_keys(obj: &Object, mapping: &HashMap<String, String>) -> Object {
    obj.iter()
        .map(|(key, value)| {
            let renamed = mapping.get(key).filter(|name| !name.is_empty()).unwrap_or(key);
            (renamed.clone(), value.clone())
        })
        .collect()
}

/// Keys of `a` that `b` lacks, in `a`'s order
#[must_use]
pub fn key_difference(a: &Object, b: &Object) -> Vec<String> {
    a.keys().filter(|key| !b.contains_key(*key)).cloned().collect()
}

/// Keys present in both, in `a`'s order
#[must_use]
pub fn key_intersection(a: &Object, b: &Object) -> Vec<String> {
    a.keys().filter(|key| b.contains_key(*key)).cloned().collect()
}

/// Swap keys and values
///
/// String values become keys verbatim; other values use their JSON text
/// (`1`, `true`, `null`). When several keys share a value the last one in
/// iteration order wins, and the entry keeps the position of the first.
#[must_use]
pub fn invert_object(obj: &Object) -> Object {
    let mut inverted = Object::new();
    for (key, value) in obj {
        let label = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        inverted.insert(label, Value::String(key.clone()));
    }
    inverted
}

/// Partition values by the label `selector` computes for each entry
///
/// Groups appear in first-seen order and hold values in input order.
///
/// ```
/// use awesome_common::object::group_by;
/// use serde_json::json;
///
/// let scores = json!({ "a": 1, "b": 2, "c": 1 });
/// let grouped = group_by(scores.as_object().unwrap(), |value, _| {
///     if value.as_i64().unwrap_or(0) % 2 == 0 { "even".into() } else { "odd".into() }
/// });
/// assert_eq!(serde_json::Value::Object(grouped), json!({ "odd": [1, 1], "even": [2] }));
/// ```
pub fn group_by<F>(obj: &Object, mut selector: F) -> Object
where
    F: FnMut(&Value, &str) -> String,
{
    let mut groups = Object::new();
    for (key, value) in obj {
        let label = selector(value, key);
        if let Value::Array(members) =
            groups.entry(label).or_insert_with(|| Value::Array(Vec::new()))
        {
            members.push(value.clone());
        }
    }
    groups
}

// -----------------------------------------------------------------------------
// Equality
// -----------------------------------------------------------------------------

/// Numbers compare by value across integer and float representations
fn numbers_equal(a: &Number, b: &Number) -> bool {
    a == b || ((a.is_f64() || b.is_f64()) && a.as_f64() == b.as_f64())
}

/// Strict equality: scalars by value, containers by identity
fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(_) | Value::Object(_), _) => std::ptr::eq(a, b),
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

/// One-level comparison
///
/// Both objects need the same number of keys, and each value must be
/// strictly equal to its counterpart: scalars compare by value, nested
/// arrays and objects only match when they are the very same allocation.
#[must_use]
pub fn shallow_equal(a: &Object, b: &Object) -> bool {
    a.len() == b.len() && a.iter().all(|(key, va)| b.get(key).is_some_and(|vb| strict_equal(va, vb)))
}

/// Recursive structural equality
///
/// Objects with different key counts are unequal without looking at the
/// values. Key order does not matter; array order does.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(key, vx)| y.get(key).is_some_and(|vy| deep_equal(vx, vy)))
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(vx, vy)| deep_equal(vx, vy))
        }
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

// -----------------------------------------------------------------------------
// Flattening and paths
// -----------------------------------------------------------------------------

/// Collapse nested objects into one level with dot-joined keys
///
/// Arrays and scalars are leaves. Empty nested objects are kept as `{}`
/// leaves so [`unflatten_object`] can restore them.
///
/// ```
/// use awesome_common::object::flatten_object;
/// use serde_json::json;
///
/// let nested = json!({ "a": { "b": 1, "c": { "d": 2 } } });
/// let flat = flatten_object(nested.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(flat), json!({ "a.b": 1, "a.c.d": 2 }));
/// ```
#[must_use]
pub fn flatten_object(obj: &Object) -> Object {
    let mut flat = Object::new();
    flatten_into(None, obj, &mut flat);
    flat
}

fn flatten_into(prefix: Option<&str>, obj: &Object, out: &mut Object) {
    for (key, value) in obj {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(Some(&path), nested, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Rebuild nesting from dot-joined keys
///
/// When a key needs an intermediate object where a scalar was already
/// written (`{"a": 1, "a.b": 2}`), the scalar is replaced. Arrays written by
/// an earlier key are kept and indexed by numeric segments, as in
/// [`set_nested_value`].
#[must_use]
pub fn unflatten_object(flat: &Object) -> Object {
    let mut root = Value::Object(Object::new());
    for (key, value) in flat {
        let parts: Vec<&str> = key.split('.').collect();
        set_path(&mut root, &parts, value.clone());
    }
    match root {
        Value::Object(nested) => nested,
        _ => Object::new(),
    }
}

fn set_path(target: &mut Value, path: &[&str], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        *target = value;
        return;
    };

    if let Value::Array(items) = target {
        let Ok(index) = head.parse::<usize>() else {
            return;
        };
        if index >= items.len() {
            let Some(len) = index.checked_add(1) else {
                return;
            };
            items.resize(len, Value::Null);
        }
        if let Some(item) = items.get_mut(index) {
            set_path(item, rest, value);
        }
        return;
    }

    if !target.is_object() {
        *target = Value::Object(Object::new());
    }
    if let Value::Object(map) = target {
        let slot = map.entry((*head).to_string()).or_insert(Value::Null);
        set_path(slot, rest, value);
    }
}

/// Follow `path` through objects (by key) and arrays (by index)
///
/// Returns `None` as soon as a segment is missing.
///
/// ```
/// use awesome_common::object::get_nested_value;
/// use serde_json::json;
///
/// let doc = json!({ "a": { "b": [10, 20] } });
/// assert_eq!(get_nested_value(&doc, &["a", "b", "1"]), Some(&json!(20)));
/// assert_eq!(get_nested_value(&doc, &["a", "x", "y"]), None);
/// ```
#[must_use]
pub fn get_nested_value<'a>(obj: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(obj, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    })
}

/// Write `value` at `path`, creating intermediate objects, in place
///
/// Existing arrays along the path are kept and indexed by numeric segments;
/// an index past the end grows the array, padding the gap with `null`. A
/// non-numeric segment on an array leaves it unchanged. Other non-container
/// intermediates are replaced by objects. An empty path leaves `obj`
/// untouched.
pub fn set_nested_value<'a>(obj: &'a mut Value, path: &[&str], value: Value) -> &'a mut Value {
    if !path.is_empty() {
        set_path(obj, path, value);
    }
    obj
}

// -----------------------------------------------------------------------------
// Freezing
// -----------------------------------------------------------------------------

/// Read-only handle to a JSON value
///
/// Only shared access is exposed, so nothing reachable through the handle
/// can change. Clones share the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frozen(Arc<Value>);

impl Frozen {
    /// Nested lookup on the frozen value
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        get_nested_value(&self.0, path)
    }

    /// Editable copy of the frozen value
    #[must_use]
    pub fn thaw(&self) -> Value {
        self.0.as_ref().clone()
    }

    /// Whether two handles share the same allocation
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Frozen {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl Serialize for Frozen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Make `value` and everything inside it immutable
///
/// Takes ownership instead of copying; the returned handle is the only way
/// to reach the data.
#[must_use]
pub fn freeze_object(value: Value) -> Frozen {
    Frozen(Arc::new(value))
}
