//! Get/set accessors focused on a property path inside a JSON value.
//!
//! A [`Path`] is either a single key or an ordered list of keys. Lenses are
//! cheap to build, but [`get_lens`] still memoizes one shared [`Lens`] per
//! distinct path. The cache only grows; paths used in practice form a small,
//! fixed set.
//!
//! Reading with a single key from a missing target is an error, while a
//! deep path over a missing target reads as absent.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by lens reads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LensError {
    /// A top-level property was requested from a target that does not exist.
    #[error("cannot read property '{key}' of undefined")]
    UndefinedTarget { key: String },
}

/// Location of a value inside nested objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    Key(String),
    Keys(Vec<String>),
}

impl Path {
    fn keys(&self) -> &[String] {
        match self {
            Path::Key(key) => std::slice::from_ref(key),
            Path::Keys(keys) => keys,
        }
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Path::Key(key.to_string())
    }
}

impl From<String> for Path {
    fn from(key: String) -> Self {
        Path::Key(key)
    }
}

impl From<Vec<String>> for Path {
    fn from(keys: Vec<String>) -> Self {
        Path::Keys(keys)
    }
}

impl From<&[&str]> for Path {
    fn from(keys: &[&str]) -> Self {
        Path::Keys(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(keys: [&str; N]) -> Self {
        Path::Keys(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// Get/set pair focused on one [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lens {
    path: Path,
}

impl Lens {
    pub fn new(path: impl Into<Path>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the focused value.
    ///
    /// `target` of `None` is an error for [`Path::Key`] and `Ok(None)` for
    /// [`Path::Keys`]. Absent keys read as `Ok(None)` for both.
    pub fn view<'a>(&self, target: Option<&'a Value>) -> Result<Option<&'a Value>, LensError> {
        match (&self.path, target) {
            (Path::Key(key), None) => Err(LensError::UndefinedTarget { key: key.clone() }),
            (Path::Key(key), Some(value)) => Ok(value.get(key.as_str())),
            (Path::Keys(keys), target) => Ok(target.and_then(|root| {
                keys.iter()
                    .try_fold(root, |current, key| current.get(key.as_str()))
            })),
        }
    }

    /// Return a copy of `target` with the focused value replaced.
    ///
    /// Ancestors are cloned and siblings preserved. Missing or non-object
    /// ancestors are replaced by fresh objects.
    pub fn set(&self, value: Value, target: &Value) -> Value {
        assoc_path(self.path.keys(), value, target)
    }

    /// Return a copy of `target` with `f` applied to the focused value.
    pub fn over<F>(&self, target: &Value, f: F) -> Value
    where
        F: FnOnce(Option<&Value>) -> Value,
    {
        let current = self
            .path
            .keys()
            .iter()
            .try_fold(target, |current, key| current.get(key.as_str()));
        self.set(f(current), target)
    }
}

fn assoc_path(keys: &[String], value: Value, target: &Value) -> Value {
    let Some((head, rest)) = keys.split_first() else {
        return value;
    };

    static NULL: Value = Value::Null;

    let child = target.get(head.as_str()).unwrap_or(&NULL);
    let updated = assoc_path(rest, value, child);

    let mut map = match target {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    map.insert(head.clone(), updated);
    Value::Object(map)
}

type LensCache = Mutex<HashMap<Path, Arc<Lens>>>;

fn lens_cache() -> &'static LensCache {
    static CACHE: OnceLock<LensCache> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Shared lens for `path`, built on first use.
pub fn get_lens(path: impl Into<Path>) -> Arc<Lens> {
    let path = path.into();
    let mut cache = lens_cache().lock();
    if let Some(lens) = cache.get(&path) {
        return Arc::clone(lens);
    }

    tracing::trace!(?path, "Caching new lens");
    let lens = Arc::new(Lens::new(path.clone()));
    cache.insert(path, Arc::clone(&lens));
    lens
}

/// Number of distinct paths memoized by [`get_lens`].
pub fn lens_cache_len() -> usize {
    lens_cache().lock().len()
}

/// Reads the value at a path.
#[derive(Debug, Clone)]
pub struct Selector {
    lens: Arc<Lens>,
}

impl Selector {
    pub fn select<'a>(&self, target: Option<&'a Value>) -> Result<Option<&'a Value>, LensError> {
        self.lens.view(target)
    }
}

/// Writes the value at a path without touching the input.
#[derive(Debug, Clone)]
pub struct Setter {
    lens: Arc<Lens>,
}

impl Setter {
    pub fn set(&self, value: Value, target: &Value) -> Value {
        self.lens.set(value, target)
    }
}

pub fn create_selector(path: impl Into<Path>) -> Selector {
    Selector {
        lens: get_lens(path),
    }
}

pub fn create_setter(path: impl Into<Path>) -> Setter {
    Setter {
        lens: get_lens(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_key_view() {
        let lens = Lens::new("k");
        let obj = json!({ "k": "v" });
        assert_eq!(lens.view(Some(&obj)).unwrap(), Some(&json!("v")));
        assert_eq!(lens.view(Some(&json!({}))).unwrap(), None);
    }

    #[test]
    fn test_single_key_view_on_missing_target_errors() {
        let err = Lens::new("k").view(None).unwrap_err();
        assert_eq!(err, LensError::UndefinedTarget { key: "k".into() });
    }

    #[test]
    fn test_deep_view_on_missing_target_is_none() {
        assert_eq!(Lens::new(["a", "b"]).view(None).unwrap(), None);
    }

    #[test]
    fn test_deep_view_missing_intermediate() {
        let obj = json!({ "a": { "c": 1 } });
        assert_eq!(Lens::new(["a", "b"]).view(Some(&obj)).unwrap(), None);
        assert_eq!(Lens::new(["x", "b"]).view(Some(&obj)).unwrap(), None);
    }

    #[test]
    fn test_set_creates_missing_ancestors() {
        let updated = Lens::new(["a", "b", "c"]).set(json!(1), &json!({ "z": true }));
        assert_eq!(updated, json!({ "z": true, "a": { "b": { "c": 1 } } }));
    }

    #[test]
    fn test_set_replaces_non_object_ancestor() {
        let updated = Lens::new(["a", "b"]).set(json!(1), &json!({ "a": "scalar" }));
        assert_eq!(updated, json!({ "a": { "b": 1 } }));
    }

    #[test]
    fn test_empty_deep_path_focuses_whole_value() {
        let lens = Lens::new(Vec::<String>::new());
        let obj = json!({ "a": 1 });
        assert_eq!(lens.view(Some(&obj)).unwrap(), Some(&obj));
        assert_eq!(lens.set(json!(2), &obj), json!(2));
    }

    #[test]
    fn test_over_applies_function() {
        let obj = json!({ "count": 2 });
        let updated = Lens::new("count").over(&obj, |v| {
            json!(v.and_then(Value::as_i64).unwrap_or(0) + 1)
        });
        assert_eq!(updated, json!({ "count": 3 }));
    }

    #[test]
    fn test_get_lens_memoizes_per_path() {
        let a = get_lens("memo_key_for_test");
        let b = get_lens("memo_key_for_test");
        let c = get_lens(["memo_key_for_test"]);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert!(lens_cache_len() >= 2);
    }
}
