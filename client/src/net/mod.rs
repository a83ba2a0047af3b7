//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls, `middleware` rewrites outgoing requests,
//! `query_cache` holds recent responses, and `types` defines the wire schema.

pub mod api;
pub mod middleware;
pub mod query_cache;
pub mod types;
