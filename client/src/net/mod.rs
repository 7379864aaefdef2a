//! Networking modules for the auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to `POST /api/auth/login`, and `types` defines the shared wire
//! schema that is also persisted to local storage.

pub mod api;
pub mod types;
