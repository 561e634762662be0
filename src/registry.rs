use std::sync::Arc;

use crate::{
    error::Result,
    scan::{RowKeyRange, RowKeySet},
};

/// Named, shared storage for row selections owned by the host.
///
/// The crate ships no implementation; hosts plug in their own resource
/// manager. Values are handed out behind [`Arc`] and dropped when the last
/// handle goes away.
pub trait ResourceRegistry<V>: Send + Sync {
    /// Return the value stored under `name`, building it with `create` when the
    /// name is absent.
    ///
    /// Concurrent callers racing on the same name must all observe a single
    /// stored value: `create` runs at most once per name, and its error, if
    /// any, is returned without storing anything.
    fn lookup_or_create<F>(&self, name: &str, create: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Result<V>;
}

/// Store `set ∩ range` under `name`, or return what is already stored there.
///
/// The closure handed to the registry only reads `set` and `range`, so
/// whichever racing caller ends up building the value, the stored set is the
/// same.
pub fn intersect_named<R>(
    registry: &R,
    name: &str,
    set: &RowKeySet,
    range: &RowKeyRange,
) -> Result<Arc<RowKeySet>>
where
    R: ResourceRegistry<RowKeySet>,
{
    registry.lookup_or_create(name, || Ok(set.intersect(range)))
}
