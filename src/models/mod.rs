//! Data models for Biblion

pub mod book;
pub mod member;

pub use book::{Book, BookPayload};
pub use member::{Member, MemberPayload};
