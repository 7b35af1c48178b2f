//! Resolving a key sequence to a nested container.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use tether_value::{VObject, Value, ValueType};

/// Error returned by [`resolve`].
///
/// Each variant names the failing key, its position in the path (0-based)
/// and the full path, so a caller can report it without re-walking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// An intermediate key is absent.
    KeyNotFound {
        /// The missing key.
        key: String,
        /// Position of `key` in the path.
        index: usize,
        /// The full path, dotted.
        path: String,
    },

    /// An intermediate key holds something other than an object.
    NotAContainer {
        /// The key whose value is not an object.
        key: String,
        /// Position of `key` in the path.
        index: usize,
        /// The full path, dotted.
        path: String,
        /// What was found instead.
        found: ValueType,
    },
}

impl PathError {
    /// The key at which navigation stopped.
    pub fn key(&self) -> &str {
        match self {
            PathError::KeyNotFound { key, .. } | PathError::NotAContainer { key, .. } => key,
        }
    }

    /// Position of the failing key in the path.
    pub fn index(&self) -> usize {
        match self {
            PathError::KeyNotFound { index, .. } | PathError::NotAContainer { index, .. } => {
                *index
            }
        }
    }

    /// The full path being resolved, dotted.
    pub fn path(&self) -> &str {
        match self {
            PathError::KeyNotFound { path, .. } | PathError::NotAContainer { path, .. } => path,
        }
    }

    /// Re-expresses an error from resolving a path relative to `prefix` as
    /// one from resolving the whole path: `prefix` is prepended to `path`
    /// and `index` is shifted by its length.
    #[must_use]
    pub fn under<S: AsRef<str>>(mut self, prefix: &[S]) -> Self {
        if prefix.is_empty() {
            return self;
        }
        let (index, path) = match &mut self {
            PathError::KeyNotFound { index, path, .. }
            | PathError::NotAContainer { index, path, .. } => (index, path),
        };
        *index += prefix.len();
        let mut full = join(prefix);
        if !path.is_empty() {
            full.push('.');
            full.push_str(path);
        }
        *path = full;
        self
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::KeyNotFound { key, index, path } => {
                write!(f, "no such key '{key}' at index {index} in path '{path}'")
            }
            PathError::NotAContainer {
                key,
                index,
                path,
                found,
            } => write!(
                f,
                "for key '{key}' at index {index} in path '{path}', expected object, found {found}"
            ),
        }
    }
}

impl core::error::Error for PathError {}

/// Follows `path` from `root` and returns the object it ends on.
///
/// An empty path returns `root` itself (another handle to it). Nothing is
/// created or modified along the way.
pub fn resolve<S: AsRef<str>>(path: &[S], root: &VObject) -> Result<VObject, PathError> {
    let mut current = root.clone();
    for (index, key) in path.iter().enumerate() {
        let key = key.as_ref();
        let next = current.inspect(key, |value| match value {
            Some(Value::Object(obj)) => Ok(obj.clone()),
            Some(other) => Err(Some(other.value_type())),
            None => Err(None),
        });
        current = match next {
            Ok(obj) => obj,
            Err(None) => {
                return Err(PathError::KeyNotFound {
                    key: key.to_string(),
                    index,
                    path: join(path),
                });
            }
            Err(Some(found)) => {
                return Err(PathError::NotAContainer {
                    key: key.to_string(),
                    index,
                    path: join(path),
                    found,
                });
            }
        };
    }
    Ok(current)
}

fn join<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(".")
}
