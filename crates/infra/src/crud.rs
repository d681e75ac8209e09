//! Generic `CrudService` over any store.

use std::sync::Arc;

use ajaxlab_core::{CrudService, DomainResult, ListQuery, Page, RecordId, Resource};

use crate::store::Store;

/// The plain CRUD service: no rules beyond what `Resource` encodes.
pub struct StoreCrud<R: Resource> {
    store: Arc<dyn Store<R>>,
}

impl<R: Resource> StoreCrud<R> {
    pub fn new(store: Arc<dyn Store<R>>) -> Self {
        Self { store }
    }
}

impl<R: Resource> CrudService<R> for StoreCrud<R> {
    fn list(&self, query: &ListQuery) -> DomainResult<Page<R>> {
        query.apply(self.store.list())
    }

    fn get(&self, id: RecordId) -> Option<R> {
        self.store.get(id)
    }

    fn create(&self, draft: R::Draft) -> R {
        let record = self.store.create(R::from_draft(draft));
        tracing::debug!(id = %record.id(), "record created");
        record
    }

    fn replace(&self, id: RecordId, draft: R::Draft) -> Option<R> {
        let mut draft = Some(draft);
        self.store.modify(id, &mut |record: &mut R| {
            if let Some(d) = draft.take() {
                record.replace_with(d);
            }
        })
    }

    fn delete(&self, id: RecordId) {
        if !self.store.delete(id) {
            tracing::debug!(%id, "delete of absent record ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryStore;
    use ajaxlab_core::{PageRequest, Record};

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: RecordId,
        label: String,
    }

    impl Record for Tag {
        fn id(&self) -> RecordId {
            self.id
        }

        fn assign_id(&mut self, id: RecordId) {
            self.id = id;
        }
    }

    impl Resource for Tag {
        type Draft = String;

        fn from_draft(label: String) -> Self {
            Self {
                id: RecordId::UNASSIGNED,
                label,
            }
        }

        fn replace_with(&mut self, label: String) {
            self.label = label;
        }

        fn matches_keyword(&self, keyword: &str) -> bool {
            self.label.contains(keyword)
        }
    }

    fn service() -> StoreCrud<Tag> {
        StoreCrud::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn create_get_replace_delete() {
        let svc = service();
        let tag = svc.create("rust".into());
        assert_eq!(svc.get(tag.id()), Some(tag.clone()));

        let replaced = svc.replace(tag.id(), "ajax".into()).unwrap();
        assert_eq!(replaced.label, "ajax");
        assert_eq!(replaced.id(), tag.id());

        svc.delete(tag.id());
        svc.delete(tag.id());
        assert!(svc.get(tag.id()).is_none());
    }

    #[test]
    fn replace_missing_is_none() {
        assert!(service().replace(RecordId::new(3), "x".into()).is_none());
    }

    #[test]
    fn list_filters_and_pages() {
        let svc = service();
        for i in 0..20 {
            svc.create(format!("tag-{i}"));
        }
        let page = svc
            .list(&ListQuery::all().with_page(PageRequest::new(0, 10)))
            .unwrap();
        assert_eq!(page.items.len(), 10);
        assert!(page.has_next);

        let page = svc.list(&ListQuery::all().with_keyword("tag-1")).unwrap();
        // tag-1, tag-10..tag-19
        assert_eq!(page.items.len(), 11);
    }
}
