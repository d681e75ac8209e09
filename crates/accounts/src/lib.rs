//! REST practice resource: users that own orders.
//!
//! Users support keyword search, pagination and full-replace updates. Orders
//! are only reachable through their owning user, and go away with it.

pub mod order;
pub mod service;
pub mod user;

pub use order::{OrderDraft, OrderStatus, RestOrder};
pub use service::AccountService;
pub use user::{RestUser, RestUserDraft};
