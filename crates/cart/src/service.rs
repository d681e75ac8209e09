use std::sync::Arc;

use ajaxlab_core::{DomainError, DomainResult, RecordId};
use ajaxlab_infra::Store;

use crate::item::CartItem;

const SEED: &[&str] = &[
    "手機",
    "平板",
    "筆電",
    "藍牙耳機",
    "耳罩式耳機",
    "無線滑鼠",
    "電視",
    "電競筆電",
    "電腦螢幕",
    "機械鍵盤",
];

pub struct CartService {
    store: Arc<dyn Store<CartItem>>,
}

impl CartService {
    pub fn new(store: Arc<dyn Store<CartItem>>) -> Self {
        Self { store }
    }

    /// Populate an empty store with ten items of quantity 1. A store that
    /// already holds items is left alone.
    pub fn seed_if_empty(&self) {
        if self.store.count() > 0 {
            return;
        }
        for name in SEED {
            self.store.create(CartItem::new(*name, 1));
        }
        tracing::debug!(items = SEED.len(), "cart seeded");
    }

    pub fn current_cart(&self) -> Vec<CartItem> {
        self.store.list()
    }

    pub fn find(&self, id: RecordId) -> Option<CartItem> {
        self.store.get(id)
    }

    /// Set the quantity of item `id`.
    ///
    /// A missing id is an `InvalidArgument`; an unknown id is a silent no-op
    /// (`Ok(None)`).
    pub fn update_quantity(
        &self,
        id: Option<RecordId>,
        new_qty: i32,
    ) -> DomainResult<Option<CartItem>> {
        let id = id.ok_or_else(|| DomainError::invalid_argument("product id must not be empty"))?;

        let updated = self.store.modify(id, &mut |item: &mut CartItem| item.quantity = new_qty);
        match &updated {
            Some(item) => tracing::info!(%id, quantity = item.quantity, "cart quantity updated"),
            None => tracing::debug!(%id, "quantity update for unknown item ignored"),
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ajaxlab_infra::InMemoryStore;

    fn seeded() -> CartService {
        let svc = CartService::new(Arc::new(InMemoryStore::new()));
        svc.seed_if_empty();
        svc
    }

    #[test]
    fn seeds_ten_items_once() {
        let svc = seeded();
        svc.seed_if_empty();
        let cart = svc.current_cart();
        assert_eq!(cart.len(), 10);
        assert!(cart.iter().all(|i| i.quantity == 1));
        assert_eq!(cart[0].name, "手機");
    }

    #[test]
    fn updates_quantity_in_place() {
        let svc = seeded();
        let item = svc.update_quantity(Some(RecordId::new(3)), 7).unwrap().unwrap();
        assert_eq!(item.quantity, 7);
        assert_eq!(svc.find(RecordId::new(3)).unwrap().quantity, 7);
    }

    #[test]
    fn missing_id_is_invalid_argument() {
        let err = seeded().update_quantity(None, 2).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_id_is_silent_noop() {
        let svc = seeded();
        assert_eq!(svc.update_quantity(Some(RecordId::new(99)), 2), Ok(None));
        assert_eq!(svc.current_cart().len(), 10);
    }

    #[test]
    fn negative_quantity_is_not_validated() {
        let item = seeded()
            .update_quantity(Some(RecordId::new(1)), -1)
            .unwrap()
            .unwrap();
        assert_eq!(item.quantity, -1);
    }
}
