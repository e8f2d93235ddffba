//! Index management endpoints.

mod get_mapping;
mod put_mapping;

use std::fmt;
use std::sync::Arc;

pub use get_mapping::{GetMapping, GetMappingEndpoint, GetMappingResponse, IndexMappingRecord};
pub use put_mapping::{PutMapping, PutMappingEndpoint, PutMappingResponse};

/// The `indices` namespace of a [`Client`](crate::Client).
pub struct Indices<T> {
    transport: Arc<T>,
}

impl<T> Indices<T> {
    pub(crate) fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Updates the mapping of `index`.
    pub fn put_mapping(&self, index: impl Into<String>) -> PutMapping<T> {
        PutMapping::new(Arc::clone(&self.transport)).index(index)
    }

    /// Reads mappings. Call [`GetMapping::index`] to narrow the target.
    pub fn get_mapping(&self) -> GetMapping<T> {
        GetMapping::new(Arc::clone(&self.transport))
    }
}

impl<T> fmt::Debug for Indices<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indices").finish_non_exhaustive()
    }
}
