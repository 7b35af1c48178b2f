//! Field descriptors: where each field of a record lives in the tree.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use std::collections::{HashMap, HashSet};

use tether_core::{Bindable, Shape, Ty};
use tether_path::Directive;

use crate::{DuplicateFieldError, SchemaError};

/// One bindable field of a record, flattened out of any embeddings.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Key read from the resolved container.
    pub name: &'static str,

    /// Containers to walk from the base, outermost first.
    pub path: Vec<&'static str>,

    /// Field indices from the root record down to this field.
    pub index: Vec<usize>,

    /// Declared field names along `index`, e.g. `["base", "id"]`.
    pub members: Vec<&'static str>,

    /// Declared type, with one pointer level removed.
    pub shape: &'static Shape,

    /// The field is an `Option<Box<T>>` and `shape` describes `T`.
    pub indirect: bool,

    /// The `convert` flag.
    pub convert: bool,

    /// The `optional` flag.
    pub optional: bool,

    /// The key came from the annotation rather than the field name.
    pub named: bool,

    /// Number of embeddings between the root record and this field.
    pub depth: usize,

    /// The record type that declares the field.
    pub defined_in: &'static Shape,
}

impl FieldDescriptor {
    /// Path and name joined by dots, e.g. `a.b.c`.
    pub fn dotted(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push_str(segment);
            out.push('.');
        }
        out.push_str(self.name);
        out
    }

    /// Declared field names joined by dots, e.g. `base.id`.
    pub fn member_path(&self) -> String {
        self.members.join(".")
    }
}

/// The descriptors of one record type, in binding order: declaration
/// order within a record, shallower embeddings first.
#[derive(Debug)]
pub struct Schema {
    shape: &'static Shape,
    fields: Vec<FieldDescriptor>,
}

struct Pending {
    shape: &'static Shape,
    index: Vec<usize>,
    members: Vec<&'static str>,
}

impl Schema {
    /// Derives the descriptors of a record shape.
    ///
    /// Embedded records (`#[tether(flatten)]` without a naming annotation)
    /// are expanded breadth first. A field whose key was already bound at
    /// a shallower depth is dropped; two fields binding one key at the same
    /// depth through different embeddings are an error.
    pub fn build(shape: &'static Shape) -> Result<Self, SchemaError> {
        if shape.as_record().is_none() {
            return Err(SchemaError::NotARecord {
                type_identifier: shape.type_identifier,
            });
        }

        let mut candidates = Vec::new();
        let mut visited: HashSet<TypeId> = HashSet::new();
        let mut current = vec![Pending {
            shape,
            index: Vec::new(),
            members: Vec::new(),
        }];
        let mut depth = 0;

        while !current.is_empty() {
            let mut next = Vec::new();
            let mut level = HashSet::new();

            for pending in current {
                let id = pending.shape.type_id();
                if visited.contains(&id) {
                    trace!(
                        "{} already expanded at a shallower depth",
                        pending.shape.type_identifier
                    );
                    continue;
                }
                level.insert(id);

                let Some(rec) = pending.shape.as_record() else {
                    continue;
                };

                for (i, field) in rec.fields.iter().enumerate() {
                    if !field.is_public() {
                        continue;
                    }
                    let ann = match field.annotation.map(Directive::parse) {
                        Some(Directive::Skip) => continue,
                        Some(Directive::Bind(ann)) => Some(ann),
                        None => None,
                    };
                    let named = ann.as_ref().is_some_and(|a| a.is_named());

                    let mut field_shape = field.shape();
                    let mut indirect = false;
                    if let Ty::Pointer(inner) = field_shape.ty {
                        field_shape = inner();
                        indirect = true;
                    }

                    let mut index = pending.index.clone();
                    index.push(i);
                    let mut members = pending.members.clone();
                    members.push(field.name);

                    if !named && field.is_flatten() && field_shape.as_record().is_some() {
                        next.push(Pending {
                            shape: field_shape,
                            index,
                            members,
                        });
                        continue;
                    }

                    let (name, path) = match &ann {
                        Some(a) if a.is_named() => (a.name, a.path.clone()),
                        _ => (field.name, Vec::new()),
                    };
                    candidates.push(FieldDescriptor {
                        name,
                        path,
                        index,
                        members,
                        shape: field_shape,
                        indirect,
                        convert: ann.as_ref().is_some_and(|a| a.convert()),
                        optional: ann.as_ref().is_some_and(|a| a.optional()),
                        named,
                        depth,
                        defined_in: pending.shape,
                    });
                }
            }

            visited.extend(level);
            current = next;
            depth += 1;
        }

        let fields = resolve_collisions(shape, candidates)?;
        debug!(
            "built schema for {}: {} fields",
            shape.type_identifier,
            fields.len()
        );
        Ok(Self { shape, fields })
    }

    /// The cached schema of `T`, built on first use.
    pub fn for_type<T: Bindable>() -> Result<Arc<Schema>, SchemaError> {
        schema(T::SHAPE)
    }

    /// The record this schema describes.
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// The descriptors, in binding order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Descriptors bound to the dotted key `key`.
    pub fn bound_to<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FieldDescriptor> {
        self.fields.iter().filter(move |f| f.dotted() == key)
    }
}

/// The cached schema of a record shape, built on first use.
pub fn schema(shape: &'static Shape) -> Result<Arc<Schema>, SchemaError> {
    crate::cache::get_or_build(shape)
}

fn resolve_collisions(
    root: &'static Shape,
    candidates: Vec<FieldDescriptor>,
) -> Result<Vec<FieldDescriptor>, SchemaError> {
    // key -> (depth, owner index chain, member path) of the first claimant
    let mut claimed: HashMap<String, (usize, Vec<usize>, String)> = HashMap::new();
    let mut fields = Vec::with_capacity(candidates.len());

    for desc in candidates {
        let key = desc.dotted();
        let owner = desc.index.split_last().map_or(&[][..], |(_, rest)| rest);
        match claimed.get(&key) {
            Some((depth, _, _)) if *depth < desc.depth => {
                trace!(
                    "{} shadowed by a shallower field bound to '{}'",
                    desc.member_path(),
                    key
                );
                continue;
            }
            Some((depth, first_owner, first)) if first_owner.as_slice() != owner => {
                return Err(DuplicateFieldError {
                    key,
                    depth: *depth,
                    record: root.type_identifier,
                    first: first.clone(),
                    second: desc.member_path(),
                }
                .into());
            }
            Some(_) => {}
            None => {
                claimed.insert(key, (desc.depth, owner.to_vec(), desc.member_path()));
            }
        }
        fields.push(desc);
    }

    Ok(fields)
}
