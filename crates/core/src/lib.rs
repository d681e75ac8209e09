//! `ajaxlab-core` — shared building blocks for every record-backed resource.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no storage).

pub mod crud;
pub mod entity;
pub mod error;
pub mod id;
pub mod page;

pub use crud::CrudService;
pub use entity::{Record, Resource};
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use page::{ListQuery, Page, PageRequest, SortOrder, SortSpec, paginate};
