//! Shopping cart: a seeded list of items whose quantity can be edited in place.

pub mod item;
pub mod service;

pub use item::CartItem;
pub use service::CartService;
