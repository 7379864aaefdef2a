//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation) and the role
//! guard from page and component logic so they can be driven natively in tests.

pub mod auth;
pub mod navigation;
pub mod storage;
