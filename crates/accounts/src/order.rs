use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ajaxlab_core::{Record, RecordId};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
    Unpaid,
}

/// An order always belongs to exactly one user, fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestOrder {
    pub id: RecordId,
    pub user_id: RecordId,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied order fields. Status, owner and timestamp are server-set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub total_amount: f64,
}

impl RestOrder {
    pub fn place(user_id: RecordId, draft: OrderDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            user_id,
            total_amount: draft.total_amount,
            status: OrderStatus::Created,
            created_at: now,
        }
    }
}

impl Record for RestOrder {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
