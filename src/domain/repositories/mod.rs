//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence port: services depend on them and never
//! on a storage technology. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated with `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link insert, lookup and delete
//! - [`AccountRepository`] - Account insert and lookup by email

pub mod account_repository;
pub mod link_repository;

pub use account_repository::AccountRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
