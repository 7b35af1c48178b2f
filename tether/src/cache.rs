//! Process-wide cache of built schemas, keyed by the record's `TypeId`.
//!
//! Building is idempotent, so two threads racing on a cold entry only
//! duplicate work; the first insert wins.

use alloc::sync::Arc;
use core::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;
use tether_core::Shape;

use crate::{Schema, SchemaError};

static CACHE: OnceLock<RwLock<HashMap<TypeId, Arc<Schema>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<TypeId, Arc<Schema>>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the cached schema for `shape`, building it on a miss.
///
/// Failed builds are not cached.
pub(crate) fn get_or_build(shape: &'static Shape) -> Result<Arc<Schema>, SchemaError> {
    let key = shape.type_id();

    // Fast path: read lock only
    {
        let cache = cache().read();
        if let Some(schema) = cache.get(&key) {
            debug!("schema cache hit for {}", shape.type_identifier);
            return Ok(Arc::clone(schema));
        }
    }

    debug!("schema cache miss for {}", shape.type_identifier);
    let built = Arc::new(Schema::build(shape)?);

    let mut cache = cache().write();
    Ok(Arc::clone(cache.entry(key).or_insert(built)))
}

/// Number of cached schemas.
#[cfg(test)]
pub(crate) fn len() -> usize {
    CACHE.get().map_or(0, |cache| cache.read().len())
}
