use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use ajaxlab_core::{Record, RecordId};

use super::Store;

#[derive(Debug)]
struct Inner<R> {
    next_id: u64,
    records: BTreeMap<RecordId, R>,
}

/// In-memory store guarded by a single mutex.
///
/// The id counter lives under the same lock as the records, so id assignment
/// and every read-modify-write is atomic with respect to other callers.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    inner: Mutex<Inner<R>>,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        // Every mutation is a single map operation: a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("store mutex was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl<R: Record> InMemoryStore<R> {
    /// Build a store pre-populated with `records`, each given a fresh id.
    pub fn seeded(records: impl IntoIterator<Item = R>) -> Self {
        let store = Self::new();
        for record in records {
            store.create(record);
        }
        store
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Store<R> for InMemoryStore<R> {
    fn create(&self, mut record: R) -> R {
        let mut inner = self.lock();
        let id = RecordId::new(inner.next_id);
        inner.next_id += 1;
        record.assign_id(id);
        inner.records.insert(id, record.clone());
        record
    }

    fn get(&self, id: RecordId) -> Option<R> {
        self.lock().records.get(&id).cloned()
    }

    fn list(&self) -> Vec<R> {
        self.lock().records.values().cloned().collect()
    }

    fn modify(&self, id: RecordId, f: &mut dyn FnMut(&mut R)) -> Option<R> {
        let mut inner = self.lock();
        let slot = inner.records.get_mut(&id)?;
        f(slot);
        slot.assign_id(id);
        Some(slot.clone())
    }

    fn delete(&self, id: RecordId) -> bool {
        self.lock().records.remove(&id).is_some()
    }

    fn retain(&self, keep: &mut dyn FnMut(&R) -> bool) -> usize {
        let mut inner = self.lock();
        let before = inner.records.len();
        inner.records.retain(|_, r| keep(r));
        before - inner.records.len()
    }

    fn count(&self) -> usize {
        self.lock().records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        body: String,
    }

    impl Note {
        fn new(body: &str) -> Self {
            Self {
                id: RecordId::new(999),
                body: body.to_string(),
            }
        }
    }

    impl Record for Note {
        fn id(&self) -> RecordId {
            self.id
        }

        fn assign_id(&mut self, id: RecordId) {
            self.id = id;
        }
    }

    #[test]
    fn create_ignores_incoming_id() {
        let store = InMemoryStore::new();
        let a = store.create(Note::new("a"));
        let b = store.create(Note::new("b"));
        assert_eq!(a.id, RecordId::new(1));
        assert_eq!(b.id, RecordId::new(2));
        assert_eq!(store.get(a.id), Some(a));
    }

    #[test]
    fn deleted_ids_are_not_reissued() {
        let store = InMemoryStore::new();
        let a = store.create(Note::new("a"));
        assert!(store.delete(a.id));
        assert!(!store.delete(a.id));
        let b = store.create(Note::new("b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn modify_on_missing_id_is_a_noop() {
        let store: InMemoryStore<Note> = InMemoryStore::new();
        assert!(store.modify(RecordId::new(7), &mut |n: &mut Note| n.body.clear()).is_none());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn modify_keeps_stored_id() {
        let store = InMemoryStore::seeded([Note::new("a")]);
        let updated = store
            .modify(RecordId::new(1), &mut |n: &mut Note| {
                n.id = RecordId::new(99);
                n.body = "b".into();
            })
            .unwrap();
        assert_eq!(updated.id, RecordId::new(1));
        assert_eq!(store.get(RecordId::new(1)).unwrap().body, "b");
    }

    #[test]
    fn list_is_in_insertion_order() {
        let store = InMemoryStore::seeded(["c", "a", "b"].map(Note::new));
        let bodies: Vec<_> = store.list().into_iter().map(|n| n.body).collect();
        assert_eq!(bodies, ["c", "a", "b"]);
    }

    #[test]
    fn retain_reports_removed() {
        let store = InMemoryStore::seeded(["keep", "drop", "drop"].map(Note::new));
        assert_eq!(store.retain(&mut |n: &Note| n.body == "keep"), 2);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn concurrent_modifies_do_not_lose_updates() {
        let store = Arc::new(InMemoryStore::seeded([Note::new("")]));
        let id = RecordId::new(1);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.modify(id, &mut |n: &mut Note| n.body.push('x'));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.get(id).unwrap().body.len(), 800);
    }

    proptest! {
        #[test]
        fn ids_are_unique_across_creates_and_deletes(ops in proptest::collection::vec(any::<bool>(), 1..80)) {
            let store = InMemoryStore::new();
            let mut issued = HashSet::new();
            for create in ops {
                if create {
                    let note = store.create(Note::new("n"));
                    prop_assert!(issued.insert(note.id));
                } else if let Some(first) = store.list().first() {
                    store.delete(first.id);
                }
            }
        }
    }
}
