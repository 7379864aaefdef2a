//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session through context and call back into the shared
//! session store; they never write `AuthState` themselves.

pub mod dashboard_nav;
pub mod login_modal;
pub mod navbar;
