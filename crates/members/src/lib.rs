//! Member registry used by the DTO chapter.
//!
//! `Member` carries sensitive fields (password, phone number) and is never
//! serialized directly; the API maps it to a response shape that lists only
//! the public fields.

pub mod member;
pub mod service;

pub use member::{Member, NewMember};
pub use service::MemberService;
