//! Service contract behind the generic CRUD router.

use crate::entity::Resource;
use crate::error::DomainResult;
use crate::id::RecordId;
use crate::page::{ListQuery, Page};

/// Thin orchestration over a store.
///
/// "Not found" is never an error here: lookups return `None` and deletes are
/// idempotent. The only failure is a malformed list query.
pub trait CrudService<R: Resource>: Send + Sync {
    fn list(&self, query: &ListQuery) -> DomainResult<Page<R>>;

    fn get(&self, id: RecordId) -> Option<R>;

    fn create(&self, draft: R::Draft) -> R;

    fn replace(&self, id: RecordId, draft: R::Draft) -> Option<R>;

    fn delete(&self, id: RecordId);
}
