use std::sync::Arc;

use chrono::{DateTime, Utc};

use ajaxlab_core::{CrudService, DomainResult, ListQuery, Page, RecordId, Resource};
use ajaxlab_infra::Store;

use crate::order::{OrderDraft, RestOrder};
use crate::user::{RestUser, RestUserDraft};

/// Users + their orders over two stores.
///
/// Each call touches the stores in a fixed order (users, then orders). A user
/// deleted between the parent check and the order insert leaves an orphan
/// order; nothing here guards against that.
pub struct AccountService {
    users: Arc<dyn Store<RestUser>>,
    orders: Arc<dyn Store<RestOrder>>,
}

impl AccountService {
    pub fn new(users: Arc<dyn Store<RestUser>>, orders: Arc<dyn Store<RestOrder>>) -> Self {
        Self { users, orders }
    }

    // --- users ---

    pub fn users(&self, query: &ListQuery) -> DomainResult<Page<RestUser>> {
        query.apply(self.users.list())
    }

    pub fn user(&self, id: RecordId) -> Option<RestUser> {
        self.users.get(id)
    }

    pub fn create_user(&self, draft: RestUserDraft) -> RestUser {
        let user = self.users.create(RestUser::from_draft(draft));
        tracing::info!(id = %user.id, "user created");
        user
    }

    /// Full replace of name, email and active. `None` when the user is absent.
    pub fn replace_user(&self, id: RecordId, draft: RestUserDraft) -> Option<RestUser> {
        let mut draft = Some(draft);
        self.users.modify(id, &mut |user: &mut RestUser| {
            if let Some(d) = draft.take() {
                user.replace_with(d);
            }
        })
    }

    /// Remove the user and every order it owns. Deleting an absent user is a no-op.
    pub fn delete_user(&self, id: RecordId) {
        let existed = self.users.delete(id);
        let orders = self.orders.retain(&mut |o: &RestOrder| o.user_id != id);
        tracing::info!(%id, existed, orders_removed = orders, "user deleted");
    }

    // --- orders (nested under a user) ---

    /// `None` when the user does not exist.
    pub fn orders_for(&self, user_id: RecordId) -> Option<Vec<RestOrder>> {
        self.users.get(user_id)?;
        Some(
            self.orders
                .list()
                .into_iter()
                .filter(|o| o.user_id == user_id)
                .collect(),
        )
    }

    /// Order `order_id`, only if it belongs to `user_id`.
    pub fn order_for(&self, user_id: RecordId, order_id: RecordId) -> Option<RestOrder> {
        self.orders
            .get(order_id)
            .filter(|o| o.user_id == user_id)
    }

    /// Place an order for an existing user, stamped `CREATED` at `now`.
    ///
    /// Returns `None` and stores nothing when the user does not exist.
    pub fn create_order_for_user(
        &self,
        user_id: RecordId,
        draft: OrderDraft,
        now: DateTime<Utc>,
    ) -> Option<RestOrder> {
        let Some(user) = self.users.get(user_id) else {
            tracing::debug!(%user_id, "order rejected: no such user");
            return None;
        };

        let order = self.orders.create(RestOrder::place(user.id, draft, now));
        tracing::info!(user_id = %user.id, order_id = %order.id, "order created");
        Some(order)
    }
}

impl CrudService<RestUser> for AccountService {
    fn list(&self, query: &ListQuery) -> DomainResult<Page<RestUser>> {
        self.users(query)
    }

    fn get(&self, id: RecordId) -> Option<RestUser> {
        self.user(id)
    }

    fn create(&self, draft: RestUserDraft) -> RestUser {
        self.create_user(draft)
    }

    fn replace(&self, id: RecordId, draft: RestUserDraft) -> Option<RestUser> {
        self.replace_user(id, draft)
    }

    fn delete(&self, id: RecordId) {
        self.delete_user(id)
    }
}
