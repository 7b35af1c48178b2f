use tether_value::Value;

use crate::{Scalar, Shape, ViewBinding};

/// A type with a static [`Shape`].
///
/// Implemented for primitives, `String`, `Vec<T>`, `Option<Box<T>>`,
/// [`Value`], the view slots, and every type declared with
/// [`record!`](crate::record) or [`alias!`](crate::alias).
pub trait Bindable: Slot + 'static {
    /// The shape of this type.
    const SHAPE: &'static Shape;
}

/// Returns the shape of `T`. Usable as a `fn() -> &'static Shape`.
#[inline]
pub fn shape_of<T: Bindable>() -> &'static Shape {
    T::SHAPE
}

/// The write side of a bindable type.
///
/// Every method reports whether the write was accepted. The defaults
/// refuse, so a type only implements what its [`Ty`](crate::Ty) allows.
pub trait Slot {
    /// Stores a scalar of the slot's own scalar type.
    fn put_scalar(&mut self, scalar: Scalar) -> bool {
        let _ = scalar;
        false
    }

    /// Stores a live view.
    fn put_view(&mut self, binding: ViewBinding) -> bool {
        let _ = binding;
        false
    }

    /// Stores a dynamic value as-is.
    fn put_value(&mut self, value: Value) -> bool {
        let _ = value;
        false
    }

    /// The record behind this slot, allocating it first if the slot is an
    /// empty pointer.
    fn record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// A slot with indexed fields.
pub trait Record: Slot {
    /// The field at `index`, in declaration order.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Slot>;
}

/// Follows a chain of field indices from `root` down to a leaf slot.
///
/// Each index but the last must land on a record (or a pointer to one,
/// which is allocated on the way). Returns `None` for an empty chain or
/// when an index does not exist.
pub fn walk_mut<'a>(root: &'a mut dyn Record, chain: &[usize]) -> Option<&'a mut dyn Slot> {
    let (last, parents) = chain.split_last()?;
    let mut record = root;
    for &index in parents {
        record = record.field_mut(index)?.record_mut()?;
    }
    record.field_mut(*last)
}
