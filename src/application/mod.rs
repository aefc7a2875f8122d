//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, hashing and token handling. They
//! consume repository traits and receive every collaborator at construction.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Alias creation, resolution and removal
//! - [`services::account_service::AccountService`] - Registration and login
//! - [`services::token_service::TokenService`] - Bearer token issuance and verification

pub mod services;
