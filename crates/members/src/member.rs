use ajaxlab_core::{Record, RecordId};

/// Persisted member. Deliberately not `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

/// Registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

impl From<NewMember> for Member {
    fn from(n: NewMember) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            username: n.username,
            email: n.email,
            password: n.password,
            phone_number: n.phone_number,
        }
    }
}

impl Record for Member {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
