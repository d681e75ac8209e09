use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use ajaxlab_core::{Record, RecordId, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub active: bool,
}

/// Client-supplied user state; PUT replaces all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestUserDraft {
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl RestUserDraft {
    /// New users are active unless told otherwise.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            active: true,
        }
    }
}

impl Record for RestUser {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Resource for RestUser {
    type Draft = RestUserDraft;
    const SORT_FIELDS: &'static [&'static str] = &["id", "name", "email", "active"];

    fn from_draft(draft: RestUserDraft) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: draft.name,
            email: draft.email,
            active: draft.active,
        }
    }

    fn replace_with(&mut self, draft: RestUserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.active = draft.active;
    }

    fn matches_keyword(&self, keyword: &str) -> bool {
        self.name.contains(keyword)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "email" => self.email.cmp(&other.email),
            "active" => self.active.cmp(&other.active),
            _ => self.id.cmp(&other.id),
        }
    }
}
