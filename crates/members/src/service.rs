use std::sync::Arc;

use ajaxlab_core::RecordId;
use ajaxlab_infra::Store;

use crate::member::{Member, NewMember};

pub struct MemberService {
    store: Arc<dyn Store<Member>>,
}

impl MemberService {
    pub fn new(store: Arc<dyn Store<Member>>) -> Self {
        Self { store }
    }

    /// Add the starter member `Alice` to an empty store.
    pub fn seed_if_empty(&self) {
        if self.store.count() == 0 {
            self.store.create(Member::from(NewMember {
                username: "Alice".into(),
                email: "alice@example.com".into(),
                password: "Secret123".into(),
                phone_number: None,
            }));
        }
    }

    pub fn all(&self) -> Vec<Member> {
        self.store.list()
    }

    pub fn find(&self, id: RecordId) -> Option<Member> {
        self.store.get(id)
    }

    pub fn register(&self, new_member: NewMember) -> Member {
        let member = self.store.create(Member::from(new_member));
        tracing::info!(id = %member.id, username = %member.username, "member registered");
        member
    }
}
