use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// A sequence of container keys, outermost first.
///
/// The empty sequence designates the root. A dotted string whose first
/// segment is empty (notably `""`) also designates the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The root path.
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Splits a dotted path such as `a.b.c`.
    pub fn parse(dotted: &str) -> Self {
        Self::from_segments(dotted.split('.'))
    }

    /// Builds a path from pre-split segments.
    pub fn from_segments<S: AsRef<str>>(segments: impl IntoIterator<Item = S>) -> Self {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        match segments.first() {
            Some(first) if first.is_empty() => Self::root(),
            _ => Self { segments },
        }
    }

    /// The individual keys.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Anything that can name a base container: a dotted string or a
/// pre-split key sequence.
pub trait IntoKeyPath {
    /// Converts into a [`KeyPath`].
    fn into_key_path(self) -> KeyPath;
}

impl IntoKeyPath for KeyPath {
    fn into_key_path(self) -> KeyPath {
        self
    }
}

impl IntoKeyPath for &KeyPath {
    fn into_key_path(self) -> KeyPath {
        self.clone()
    }
}

impl IntoKeyPath for () {
    fn into_key_path(self) -> KeyPath {
        KeyPath::root()
    }
}

impl IntoKeyPath for &str {
    fn into_key_path(self) -> KeyPath {
        KeyPath::parse(self)
    }
}

impl IntoKeyPath for String {
    fn into_key_path(self) -> KeyPath {
        KeyPath::parse(&self)
    }
}

impl IntoKeyPath for &String {
    fn into_key_path(self) -> KeyPath {
        KeyPath::parse(self)
    }
}

impl<S: AsRef<str>> IntoKeyPath for &[S] {
    fn into_key_path(self) -> KeyPath {
        KeyPath::from_segments(self)
    }
}

impl<S: AsRef<str>> IntoKeyPath for Vec<S> {
    fn into_key_path(self) -> KeyPath {
        KeyPath::from_segments(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoKeyPath for [S; N] {
    fn into_key_path(self) -> KeyPath {
        KeyPath::from_segments(self)
    }
}
