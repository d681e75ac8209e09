use serde::Serialize;

use ajaxlab_core::RecordId;

/// A todo owned by a user; the board groups them by `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTodo {
    pub user_id: u64,
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
}

/// Fixed list of five todos across two users.
#[derive(Debug, Clone)]
pub struct TodoBoard {
    todos: Vec<BoardTodo>,
}

impl TodoBoard {
    pub fn demo() -> Self {
        let todo = |user_id, id, title: &str, completed| BoardTodo {
            user_id,
            id: RecordId::new(id),
            title: title.to_string(),
            completed,
        };
        Self {
            todos: vec![
                todo(1, 1, "購買牛奶", false),
                todo(1, 2, "繳納電費", true),
                todo(1, 3, "學習 Ajax", false),
                todo(2, 4, "撰寫報告", false),
                todo(2, 5, "整理房間", true),
            ],
        }
    }

    pub fn all(&self) -> &[BoardTodo] {
        &self.todos
    }

    pub fn by_id(&self, id: RecordId) -> Option<&BoardTodo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn by_user(&self, user_id: u64) -> Vec<&BoardTodo> {
        self.todos.iter().filter(|t| t.user_id == user_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_grouping() {
        let board = TodoBoard::demo();
        assert_eq!(board.all().len(), 5);
        assert_eq!(board.by_id(RecordId::new(4)).unwrap().user_id, 2);
        assert!(board.by_id(RecordId::new(6)).is_none());
        assert_eq!(board.by_user(1).len(), 3);
        assert!(board.by_user(3).is_empty());
    }

    #[test]
    fn serializes_user_id_in_camel_case() {
        let json = serde_json::to_value(&TodoBoard::demo().all()[0]).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 1);
    }
}
