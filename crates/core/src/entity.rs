//! Record traits: identity plus the hooks the generic CRUD component needs.

use core::cmp::Ordering;

use crate::id::RecordId;

/// Anything a store can hold: it has an id, and the store may overwrite it.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;

    /// Called by the store on insert; any id present on the input is replaced.
    fn assign_id(&mut self, id: RecordId);
}

/// A record that can be served by the generic CRUD component.
///
/// `Draft` is the client-supplied state (everything except server-assigned
/// fields). `replace_with` gives PUT its full-replace semantics.
pub trait Resource: Record {
    type Draft: Send + 'static;

    /// Field names accepted by `compare_by`.
    const SORT_FIELDS: &'static [&'static str] = &["id"];

    fn from_draft(draft: Self::Draft) -> Self;

    fn replace_with(&mut self, draft: Self::Draft);

    /// Keyword filter used by list endpoints. Records without a name field
    /// match everything.
    fn matches_keyword(&self, _keyword: &str) -> bool {
        true
    }

    /// Ordering by one of `SORT_FIELDS`.
    fn compare_by(&self, other: &Self, _field: &str) -> Ordering {
        self.id().cmp(&other.id())
    }
}
