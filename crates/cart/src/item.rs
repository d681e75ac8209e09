use serde::{Deserialize, Serialize};

use ajaxlab_core::{Record, RecordId};

/// One cart line.
///
/// `quantity` is expected to be non-negative but is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: name.into(),
            quantity,
        }
    }
}

impl Record for CartItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
