//! Utility building blocks used by the services.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`clock`] - Injectable time source
//! - [`password`] - Credential hashing

pub mod alias_generator;
pub mod clock;
pub mod password;
