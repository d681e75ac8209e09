//! Todo list served through the generic CRUD component.

pub mod todo;

pub use todo::{Todo, TodoDraft, seed_todos};
