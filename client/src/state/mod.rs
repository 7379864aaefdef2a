//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `roles` is static data (the Role→Route table); `auth` owns the mutable
//! session and is the only module that writes it.

pub mod auth;
pub mod roles;
