use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use ajaxlab_core::{Record, RecordId, Resource};
use ajaxlab_infra::InMemoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
}

/// Client-editable part of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

impl Record for Todo {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Resource for Todo {
    type Draft = TodoDraft;
    const SORT_FIELDS: &'static [&'static str] = &["id", "title", "completed"];

    fn from_draft(draft: TodoDraft) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            title: draft.title,
            completed: draft.completed,
        }
    }

    fn replace_with(&mut self, draft: TodoDraft) {
        self.title = draft.title;
        self.completed = draft.completed;
    }

    fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => self.title.cmp(&other.title),
            "completed" => self.completed.cmp(&other.completed),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Store holding the three starter todos (ids 1..=3).
pub fn seed_todos() -> InMemoryStore<Todo> {
    InMemoryStore::seeded(
        [
            TodoDraft::new("Learn JavaScript", true),
            TodoDraft::new("Learn Spring Boot", true),
            TodoDraft::new("Learn Ajax", false),
        ]
        .map(Todo::from_draft),
    )
}
