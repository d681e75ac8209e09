//! Infrastructure layer: record storage and the generic CRUD service.

pub mod crud;
pub mod store;

pub use crud::StoreCrud;
pub use store::{InMemoryStore, Store};
