//! Populating a record from a tree.

use alloc::string::String;
use alloc::vec::Vec;

use tether_core::convert::{assignable, coerce, convertible};
use tether_core::{Bindable, Record, Slot, Ty, ViewBinding, walk_mut};
use tether_path::{IntoKeyPath, KeyPath, resolve};
use tether_value::VObject;

use crate::{FieldDescriptor, FillError, schema};

/// Populates `target` from the container at `base` in `tree`.
///
/// `base` is a dotted string (`"a.b"`), a key sequence (`["a", "b"]`), or
/// `""`/`()` for the whole tree. Fields are bound in schema order, and the
/// fill stops at the first error; fields bound before it keep their new
/// values.
///
/// Per field, by declared type:
/// - scalars take the value when its kind is directly assignable, or when
///   the field has `convert` and the kind converts;
/// - views attach to the entry when its kind matches the capability;
/// - `Value` fields receive the entry as-is;
/// - records, sequences and pointers to them are located but left alone.
///
/// A missing key fails unless the field is `optional`.
pub fn fill<R>(target: &mut R, base: impl IntoKeyPath, tree: &VObject) -> Result<(), FillError>
where
    R: Record + Bindable,
{
    let base = base.into_key_path();
    let container = resolve(base.segments(), tree).map_err(|error| FillError::Path {
        record: R::SHAPE.type_identifier,
        field: None,
        error,
    })?;
    let schema = schema(R::SHAPE)?;

    for desc in schema.fields() {
        fill_field(&mut *target, desc, &base, &container)?;
    }
    Ok(())
}

fn fill_field(
    target: &mut dyn Record,
    desc: &FieldDescriptor,
    base: &KeyPath,
    base_container: &VObject,
) -> Result<(), FillError> {
    let record = desc.defined_in.type_identifier;
    let expected = desc.shape.type_identifier;

    let container = resolve(&desc.path, base_container).map_err(|error| FillError::Path {
        record,
        field: desc.members.last().copied(),
        error: error.under(base.segments()),
    })?;

    let Some(found) = container.value_type_of(desc.name) else {
        if desc.optional {
            trace!("{}: optional key '{}' absent", desc.member_path(), desc.name);
            return Ok(());
        }
        return Err(FillError::MissingKey {
            record,
            path: full_path(base, desc),
            name: desc.name,
        });
    };

    let incompatible = || FillError::IncompatibleAssignment {
        record,
        path: full_path(base, desc),
        name: desc.name,
        found,
        expected,
    };
    let unsettable = || FillError::Unsettable {
        record,
        path: full_path(base, desc),
        name: desc.name,
        expected,
    };

    match desc.shape.ty {
        Ty::Scalar(scalar_type) | Ty::Alias(scalar_type) => {
            let direct = assignable(found, &desc.shape.ty);
            if !(direct || desc.convert && convertible(found, scalar_type)) {
                return Err(incompatible());
            }
            let scalar = container
                .inspect(desc.name, |v| v.and_then(|v| coerce(v, scalar_type)))
                .ok_or_else(incompatible)?;
            let slot = slot_for(target, desc).ok_or_else(unsettable)?;
            if !slot.put_scalar(scalar) {
                return Err(unsettable());
            }
            trace!(
                "{}: {} '{}' as {}",
                desc.member_path(),
                if direct { "assigned" } else { "converted" },
                desc.name,
                expected
            );
        }
        _ if desc.indirect => {
            trace!("{}: indirect {} skipped", desc.member_path(), expected);
        }
        Ty::View(capability) => {
            if found != capability.value_type() {
                return Err(incompatible());
            }
            let slot = slot_for(target, desc).ok_or_else(unsettable)?;
            if !slot.put_view(ViewBinding::new(container, desc.name)) {
                return Err(unsettable());
            }
            trace!("{}: {} on '{}'", desc.member_path(), capability, desc.name);
        }
        Ty::Contract => {
            return Err(FillError::UnknownCapability {
                record,
                path: full_path(base, desc),
                name: desc.name,
                expected,
            });
        }
        Ty::Dynamic => {
            let value = container.get(desc.name).ok_or_else(unsettable)?;
            let slot = slot_for(target, desc).ok_or_else(unsettable)?;
            if !slot.put_value(value) {
                return Err(unsettable());
            }
            trace!("{}: stored {} as-is", desc.member_path(), found);
        }
        Ty::Record(_) | Ty::Sequence(_) | Ty::Pointer(_) => {
            trace!(
                "{}: {} at '{}' located, not decomposed",
                desc.member_path(),
                found,
                desc.name
            );
        }
    }
    Ok(())
}

fn slot_for<'a>(target: &'a mut dyn Record, desc: &FieldDescriptor) -> Option<&'a mut dyn Slot> {
    walk_mut(target, &desc.index)
}

fn full_path(base: &KeyPath, desc: &FieldDescriptor) -> String {
    base.segments()
        .iter()
        .map(String::as_str)
        .chain(desc.path.iter().copied())
        .collect::<Vec<_>>()
        .join(".")
}
