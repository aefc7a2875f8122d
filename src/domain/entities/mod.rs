//! Core domain entities.
//!
//! Entities are plain data structures. Each has a companion `New*` struct
//! carrying the fields the caller supplies on insert; identifiers and
//! timestamps are assigned by the store.
//!
//! - [`Link`] - alias to target URL mapping
//! - [`Account`] - registered user with a password digest

pub mod account;
pub mod link;

pub use account::{Account, NewAccount};
pub use link::{Link, NewLink};
