//! Record storage abstractions.

pub mod in_memory;

pub use in_memory::InMemoryStore;

use ajaxlab_core::{Record, RecordId};

/// Keyed record store with store-assigned identifiers.
///
/// Missing ids are never fatal: lookups and modifications return `None`, deletes
/// report `false`.
pub trait Store<R: Record>: Send + Sync {
    /// Insert `record` under a fresh id, ignoring any id it already carries.
    fn create(&self, record: R) -> R;

    fn get(&self, id: RecordId) -> Option<R>;

    /// All records in insertion (ascending id) order.
    fn list(&self) -> Vec<R>;

    /// Find-then-save as one step. The stored id always wins.
    fn modify(&self, id: RecordId, f: &mut dyn FnMut(&mut R)) -> Option<R>;

    /// Remove the record under `id`; `false` when it was already gone.
    fn delete(&self, id: RecordId) -> bool;

    /// Remove every record for which `keep` returns `false`; returns how many went.
    fn retain(&self, keep: &mut dyn FnMut(&R) -> bool) -> usize;

    fn count(&self) -> usize;
}
