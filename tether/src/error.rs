use alloc::string::String;
use core::fmt;

use tether_path::PathError;
use tether_value::ValueType;

/// Errors from deriving a record's field descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two embedded records at the same depth bind the same key.
    DuplicateField(DuplicateFieldError),

    /// The shape handed to the builder is not a record.
    NotARecord {
        /// The offending type.
        type_identifier: &'static str,
    },
}

/// Two fields reached through different embeddings claim one key at the
/// same depth, so neither can be preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFieldError {
    /// The contested key, dotted.
    pub key: String,
    /// Embedding depth of both fields.
    pub depth: usize,
    /// The record whose schema was being built.
    pub record: &'static str,
    /// Field path of the first claimant, e.g. `left.id`.
    pub first: String,
    /// Field path of the second claimant.
    pub second: String,
}

impl From<DuplicateFieldError> for SchemaError {
    fn from(err: DuplicateFieldError) -> Self {
        SchemaError::DuplicateField(err)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateField(err) => write!(
                f,
                "duplicate key '{}' at embedding depth {} in {}: {} vs {}",
                err.key, err.depth, err.record, err.first, err.second
            ),
            SchemaError::NotARecord { type_identifier } => {
                write!(f, "{type_identifier} is not a record")
            }
        }
    }
}

impl core::error::Error for SchemaError {}

/// Errors from [`fill`](crate::fill).
///
/// `path` is always the full dotted path of the container, base path
/// included; `name` is the key looked up in it; `record` is the record
/// type that declares the field.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FillError {
    /// A container on the way to a key could not be reached.
    Path {
        /// The record being filled or declaring the field.
        record: &'static str,
        /// The field whose path failed, or `None` for the base path.
        field: Option<&'static str>,
        /// What went wrong.
        error: PathError,
    },

    /// A required key is absent.
    MissingKey {
        /// Declaring record.
        record: &'static str,
        /// Container path.
        path: String,
        /// The absent key.
        name: &'static str,
    },

    /// The value has a kind the field cannot take, even with conversion
    /// where it is allowed.
    IncompatibleAssignment {
        /// Declaring record.
        record: &'static str,
        /// Container path.
        path: String,
        /// The key.
        name: &'static str,
        /// Kind of the value found.
        found: ValueType,
        /// Declared type of the field.
        expected: &'static str,
    },

    /// The field is interface-like but offers no capability the binder
    /// knows about.
    UnknownCapability {
        /// Declaring record.
        record: &'static str,
        /// Container path.
        path: String,
        /// The key.
        name: &'static str,
        /// Declared type of the field.
        expected: &'static str,
    },

    /// The field's slot refused the write.
    Unsettable {
        /// Declaring record.
        record: &'static str,
        /// Container path.
        path: String,
        /// The key.
        name: &'static str,
        /// Declared type of the field.
        expected: &'static str,
    },

    /// The record's field descriptors could not be derived.
    Schema(SchemaError),
}

impl From<SchemaError> for FillError {
    fn from(err: SchemaError) -> Self {
        FillError::Schema(err)
    }
}

struct Location<'a>(&'a str);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("the root")
        } else {
            write!(f, "path '{}'", self.0)
        }
    }
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::Path {
                record,
                field: None,
                error,
            } => write!(f, "cannot resolve base path for {record}: {error}"),
            FillError::Path {
                record,
                field: Some(field),
                error,
            } => write!(f, "cannot resolve {record}.{field}: {error}"),
            FillError::MissingKey { record, path, name } => write!(
                f,
                "missing key '{name}' at {} for {record}",
                Location(path)
            ),
            FillError::IncompatibleAssignment {
                record,
                path,
                name,
                found,
                expected,
            } => write!(
                f,
                "cannot assign {found} from key '{name}' at {} to {expected} in {record}",
                Location(path)
            ),
            FillError::UnknownCapability {
                record,
                path,
                name,
                expected,
            } => write!(
                f,
                "no known capability for {expected}, bound to key '{name}' at {} in {record}",
                Location(path)
            ),
            FillError::Unsettable {
                record,
                path,
                name,
                expected,
            } => write!(
                f,
                "cannot set {expected} from key '{name}' at {} in {record}",
                Location(path)
            ),
            FillError::Schema(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for FillError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            FillError::Path { error, .. } => Some(error),
            FillError::Schema(err) => Some(err),
            _ => None,
        }
    }
}
