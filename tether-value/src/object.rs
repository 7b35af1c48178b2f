//! Shared object handles.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::{self, Debug, Formatter};

use indexmap::IndexMap;

use crate::{Value, ValueType};

/// An object (map) value.
///
/// `VObject` is an insertion-ordered map of string keys to [`Value`]s,
/// held behind a shared handle: `clone` returns another handle to the same
/// map, and every method takes `&self`. A write through one handle is
/// visible through all of them.
///
/// No borrow is held across calls. The only re-entrancy hazard is
/// [`VObject::inspect`], whose closure must not write to the same object.
#[derive(Clone, Default)]
pub struct VObject {
    entries: Rc<RefCell<IndexMap<String, Value>>>,
}

impl VObject {
    /// Creates a new, empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Returns a copy of the value at `key`.
    ///
    /// Nested objects come back as handles to the same storage.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    /// Returns the kind of the value at `key` without copying it.
    #[must_use]
    pub fn value_type_of(&self, key: &str) -> Option<ValueType> {
        self.entries.borrow().get(key).map(Value::value_type)
    }

    /// Runs `f` against the value at `key` while the map is borrowed.
    ///
    /// # Panics
    ///
    /// Panics if `f` writes to this same object.
    pub fn inspect<R>(&self, key: &str, f: impl FnOnce(Option<&Value>) -> R) -> R {
        f(self.entries.borrow().get(key))
    }

    /// Inserts `value` at `key`, returning the previous value.
    ///
    /// An existing key keeps its position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.borrow_mut().insert(key.into(), value.into())
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.borrow_mut().shift_remove(key)
    }

    /// Snapshot of the keys, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Snapshot of the entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns `true` if both handles point at the same map.
    #[must_use]
    pub fn ptr_eq(&self, other: &VObject) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }

    /// Copies the whole subtree into fresh, unshared storage.
    #[must_use]
    pub fn deep_clone(&self) -> VObject {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), deep_clone_value(v)))
            .collect()
    }
}

fn deep_clone_value(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(obj.deep_clone()),
        Value::Array(items) => Value::Array(items.iter().map(deep_clone_value).collect()),
        other => other.clone(),
    }
}

impl PartialEq for VObject {
    /// Structural equality; key order is not significant.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.entries.borrow() == *other.entries.borrow()
    }
}

impl Debug for VObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.borrow().iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map: IndexMap<String, Value> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let a = VObject::new();
        let b = a.clone();
        b.insert("k", 1);
        assert_eq!(a.get("k"), Some(Value::Number(1.0)));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn deep_clone_detaches() {
        let inner = VObject::from_iter([("c", 1)]);
        let outer = VObject::from_iter([("inner", inner.clone())]);
        let copy = outer.deep_clone();
        inner.insert("c", 2);

        assert_eq!(copy, VObject::from_iter([("inner", VObject::from_iter([("c", 1)]))]));
        assert_ne!(copy, outer);
    }

    #[test]
    fn remove_keeps_order() {
        let obj = VObject::from_iter([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(obj.remove("b"), Some(Value::Number(2.0)));
        assert_eq!(obj.keys(), ["a", "c"]);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let obj = VObject::from_iter([("a", 1), ("b", 2)]);
        let old = obj.insert("a", "one");
        assert_eq!(old, Some(Value::Number(1.0)));
        assert_eq!(obj.keys(), ["a", "b"]);
        assert_eq!(obj.value_type_of("a"), Some(ValueType::String));
    }
}
