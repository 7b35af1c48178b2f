//! Field annotations: `"<dotted.path.to.key>[,flag[,flag...]]"` or `"-"`.
//!
//! The dotted portion ends at the first comma. Its last segment is the key
//! read from the container; the segments before it are the containers to
//! walk through first. Everything after the first comma is a flag list.
//!
//! | annotation                  | name  | path       | flags              |
//! |-----------------------------|-------|------------|--------------------|
//! | `""`                        | `""`  | `[]`       |                    |
//! | `"foo"`                     | `foo` | `[]`       |                    |
//! | `"a.b.c,convert"`           | `c`   | `[a, b]`   | `convert`          |
//! | `",optional"`               | `""`  | `[]`       | `optional`         |
//! | `"-"`                       | field excluded                          |
//!
//! An empty name means "use the field's own name"; callers decide what
//! that is.

use alloc::vec::Vec;

/// Flag allowing a value to be converted when it is not directly assignable.
pub const CONVERT: &str = "convert";

/// Flag tolerating a missing key.
pub const OPTIONAL: &str = "optional";

/// What an annotation asks the binder to do with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `"-"`: leave the field alone.
    Skip,
    /// Bind the field as described.
    Bind(Annotation<'a>),
}

impl<'a> Directive<'a> {
    /// Parses an annotation. Parsing never fails; unknown flags are kept
    /// but have no effect.
    pub fn parse(tag: &'a str) -> Self {
        if tag == "-" {
            return Directive::Skip;
        }

        let (dotted, flags) = match tag.split_once(',') {
            Some((dotted, flags)) => (dotted, flags),
            None => (tag, ""),
        };

        let mut path: Vec<&'a str> = dotted.split('.').collect();
        // split always yields at least one segment
        let name = path.pop().unwrap_or_default();

        Directive::Bind(Annotation {
            name,
            path,
            flags: Flags(flags),
        })
    }
}

/// A parsed, non-excluding annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Key read from the resolved container. Empty when the annotation did
    /// not name one.
    pub name: &'a str,
    /// Containers leading to `name`, outermost first.
    pub path: Vec<&'a str>,
    /// Flags after the first comma.
    pub flags: Flags<'a>,
}

impl Annotation<'_> {
    /// Whether the annotation names its key explicitly.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Whether the `convert` flag is set.
    pub fn convert(&self) -> bool {
        self.flags.contains(CONVERT)
    }

    /// Whether the `optional` flag is set.
    pub fn optional(&self) -> bool {
        self.flags.contains(OPTIONAL)
    }
}

/// The comma-separated flag list of an annotation, without the leading
/// comma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags<'a>(&'a str);

impl<'a> Flags<'a> {
    /// Wraps a raw flag list such as `"convert,optional"`.
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// The raw flag list.
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns `true` if no flags were given.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reports whether `flag` occupies a whole comma-delimited segment.
    /// `"convertible"` does not contain `"convert"`.
    pub fn contains(&self, flag: &str) -> bool {
        self.iter().any(|f| f == flag)
    }

    /// Iterates the individual flags.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.0.split(',').filter(|f| !f.is_empty())
    }
}
