//! Read-only demo data served by the introductory chapters.
//!
//! Nothing here is ever mutated; every call builds a fresh copy.

pub mod board;
pub mod profiles;
pub mod users;

pub use board::{BoardTodo, TodoBoard};
pub use profiles::{DeveloperProfile, Experience, developer_profiles};
pub use users::{DemoUser, demo_users};
