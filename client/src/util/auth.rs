//! Role guard shared by every protected dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard is wrapped in `RoleGuard` with its required role, so the
//! mismatch → redirect rule lives in one place and resolves through the single
//! Role→Route table.
//!
//! These guards shape navigation only. The auth endpoint must still enforce
//! access on anything it serves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, use_auth};
use crate::state::roles::{Role, route_for_role};

/// What a guarded view should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// No user yet (signed out or still rehydrating): show a placeholder.
    Pending,
    /// Signed in with another role: go to that role's route.
    Redirect(&'static str),
    /// Signed in with the required role.
    Allow,
}

pub fn evaluate_guard(state: &AuthState, required: Role) -> GuardDecision {
    let Some(user) = &state.user else {
        return GuardDecision::Pending;
    };
    if user.known_role() == Some(required) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(route_for_role(&user.role))
    }
}

/// Issues each redirect target at most once per mounted view.
#[derive(Debug, Default)]
pub struct RedirectLatch {
    issued: Cell<Option<&'static str>>,
}

impl RedirectLatch {
    /// Target to navigate to now, if any.
    pub fn next(&self, decision: GuardDecision) -> Option<&'static str> {
        let GuardDecision::Redirect(target) = decision else {
            return None;
        };
        if self.issued.get() == Some(target) {
            return None;
        }
        self.issued.set(Some(target));
        Some(target)
    }
}

/// Re-evaluate the guard whenever the session changes and redirect on mismatch.
pub fn install_role_guard<F>(auth: ReadSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let latch = RedirectLatch::default();
    Effect::new(move || {
        let decision = evaluate_guard(&auth.get(), required);
        if let Some(target) = latch.next(decision) {
            leptos::logging::log!("role guard: {required} view, redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Render `children` only for a session holding `required`.
#[component]
pub fn RoleGuard(required: Role, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    install_role_guard(auth, required, use_navigate());

    view! {
        <Show
            when=move || evaluate_guard(&auth.get(), required) == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p class="guard-placeholder__text">{required.loading_message()}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
