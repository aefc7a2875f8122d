//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod health;
pub mod links;
pub mod redirect;

pub use accounts::{login_handler, register_handler};
pub use health::health_handler;
pub use links::{delete_link_handler, save_link_handler};
pub use redirect::redirect_handler;
