use core::any::TypeId;
use core::fmt;

use crate::{Capability, ScalarType};

/// Static description of a bindable type.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    /// Identity of the described type. A function so shapes can be built
    /// in const context.
    pub id: fn() -> TypeId,

    /// Name used in diagnostics, e.g. `i64` or `ServerConfig`.
    pub type_identifier: &'static str,

    /// What kind of slot this is.
    pub ty: Ty,
}

impl Shape {
    /// Shape of a plain scalar.
    pub const fn scalar<T: 'static>(type_identifier: &'static str, scalar: ScalarType) -> Self {
        Self {
            id: TypeId::of::<T>,
            type_identifier,
            ty: Ty::Scalar(scalar),
        }
    }

    /// Shape of a named scalar subtype of `inner`.
    ///
    /// `inner` must describe a scalar (or another alias); this is checked
    /// when the constant is evaluated.
    pub const fn alias<T: 'static>(type_identifier: &'static str, inner: &'static Shape) -> Self {
        let scalar = match inner.ty {
            Ty::Scalar(s) | Ty::Alias(s) => s,
            _ => panic!("alias! needs a scalar inner type"),
        };
        Self {
            id: TypeId::of::<T>,
            type_identifier,
            ty: Ty::Alias(scalar),
        }
    }

    /// The [`TypeId`] of the described type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (self.id)()
    }

    /// Returns `true` if both shapes describe the same type.
    #[inline]
    pub fn is(&self, other: &Shape) -> bool {
        self.type_id() == other.type_id()
    }

    /// The record description, if this shape is a record.
    pub fn as_record(&self) -> Option<&RecordType> {
        match &self.ty {
            Ty::Record(rec) => Some(rec),
            _ => None,
        }
    }

    /// The underlying scalar of a scalar or alias shape.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.ty {
            Ty::Scalar(s) | Ty::Alias(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_identifier)
    }
}

/// The kind of a bindable type, from the binder's point of view.
#[derive(Clone, Copy, Debug)]
pub enum Ty {
    /// `bool`, `String` or a primitive number.
    Scalar(ScalarType),

    /// A named subtype of a scalar, such as `struct Port(u16)`. Only
    /// assignable through conversion.
    Alias(ScalarType),

    /// A struct with fields.
    Record(RecordType),

    /// A `Vec<T>`. Located but never populated.
    Sequence(fn() -> &'static Shape),

    /// A nullable owning reference, `Option<Box<T>>`.
    Pointer(fn() -> &'static Shape),

    /// A slot that receives a live view onto the tree.
    View(Capability),

    /// An interface-like slot the binder has no capability for.
    Contract,

    /// A slot holding the tree's own [`Value`](tether_value::Value).
    Dynamic,
}

/// Fields of a record, in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct RecordType {
    /// The fields. Their positions are the indices accepted by
    /// [`Record::field_mut`](crate::Record::field_mut).
    pub fields: &'static [Field],
}

/// One declared field of a record.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// Declared name.
    pub name: &'static str,

    /// Shape of the field's type.
    ///
    /// The layer of indirection allows for self-referential records.
    pub shape: fn() -> &'static Shape,

    /// Raw binding annotation, e.g. `"a.b.c,convert"` or `"-"`.
    pub annotation: Option<&'static str>,

    /// Visibility and embedding flags.
    pub flags: FieldFlags,

    /// Doc comments.
    pub doc: &'static [&'static str],
}

impl Field {
    /// Shape of the field's type.
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    /// Whether the field is visible to the binder.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.flags.contains(FieldFlags::PUBLIC)
    }

    /// Whether the field embeds its record's fields into the parent.
    #[inline]
    pub const fn is_flatten(&self) -> bool {
        self.flags.contains(FieldFlags::FLATTEN)
    }
}

bitflags::bitflags! {
    /// Flags on a [`Field`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// Declared with a visibility qualifier.
        const PUBLIC = 1 << 0;
        /// Declared with `#[tether(flatten)]`.
        const FLATTEN = 1 << 1;
    }
}

impl FieldFlags {
    /// Builds flags from the two markers a field declaration can carry.
    pub const fn from_markers(public: bool, flatten: bool) -> Self {
        let mut flags = Self::empty();
        if public {
            flags = flags.union(Self::PUBLIC);
        }
        if flatten {
            flags = flags.union(Self::FLATTEN);
        }
        flags
    }
}
