//! HTTP middleware for request processing and protection.
//!
//! Provides the bearer token gate and observability middleware.

pub mod auth;
pub mod tracing;
