//! Persistence adapters implementing the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] / [`PgAccountRepository`] - PostgreSQL via SQLx
//! - [`InMemoryLinkRepository`] / [`InMemoryAccountRepository`] - process-local maps
//!
//! [`Store`] selects a backend from configuration and owns the connection
//! lifecycle.

pub mod memory;
pub mod pg_account_repository;
pub mod pg_link_repository;
pub mod store;

pub use memory::{InMemoryAccountRepository, InMemoryLinkRepository};
pub use pg_account_repository::PgAccountRepository;
pub use pg_link_repository::PgLinkRepository;
pub use store::Store;
