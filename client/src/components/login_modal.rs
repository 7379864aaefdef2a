//! Sign-in modal: role select, email and password.
//!
//! Validation is presence-only and happens before the session store is
//! touched; the store owns `loading`, so the busy label follows it directly.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

use crate::net::api::AuthError;
use crate::net::types::LoginPayload;
use crate::state::auth::{AuthState, LoginError, SessionContext, use_auth};
use crate::state::roles::Role;

pub const MISSING_FIELDS_MESSAGE: &str = "Please choose a role and enter email & password.";

/// Build the login payload, or the inline message to show instead.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS_MESSAGE`] when the role is unset or the email
/// (after trimming) or password is empty.
pub fn validate_login_input(
    role: Option<Role>,
    email: &str,
    password: &str,
) -> Result<LoginPayload, &'static str> {
    let email = email.trim();
    match role {
        Some(role) if !email.is_empty() && !password.is_empty() => Ok(LoginPayload {
            email: email.to_owned(),
            password: password.to_owned(),
            role,
        }),
        _ => Err(MISSING_FIELDS_MESSAGE),
    }
}

/// The modal stays open while a sign-in is in flight.
pub fn can_dismiss(state: &AuthState) -> bool {
    !state.loading
}

/// Inline text for a failed sign-in.
pub fn login_error_message(err: &LoginError) -> String {
    match err {
        LoginError::InFlight => err.to_string(),
        LoginError::Rejected(AuthError::Network(_) | AuthError::Unavailable) => {
            "Unable to reach the sign-in service. Please try again.".to_owned()
        }
        LoginError::Rejected(AuthError::Timeout(_)) => {
            "The sign-in service did not respond. Please try again.".to_owned()
        }
        LoginError::Rejected(e) => e.to_string(),
    }
}

#[component]
pub fn LoginModal(on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let session = expect_context::<SessionContext>();

    let role = RwSignal::new(None::<Role>);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let busy = move || auth.get().loading;
    let ready = move || validate_login_input(role.get(), &email.get(), &password.get()).is_ok();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let payload = match validate_login_input(
            role.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = session.get_value();
            match store.login(payload).await {
                Ok(_) => on_close.run(()),
                Err(e) => error.set(Some(login_error_message(&e))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, session);
        }
    };

    let dismiss = move || {
        if can_dismiss(&auth.get_untracked()) {
            on_close.run(());
        }
    };
    let on_backdrop = move |_| dismiss();
    let on_cancel = move |_| dismiss();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            dismiss();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--login"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Sign in to the portal"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label" for="login-role">"Role"</label>
                    <select
                        id="login-role"
                        class="login-input"
                        on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
                    >
                        <option value="" selected=move || role.get().is_none()>"Select your role"</option>
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.login_label()}</option> })
                            .collect_view()}
                    </select>

                    <label class="login-form__label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="you@hospital.org"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="login-form__label" for="login-password">"Password"</label>
                    <div class="login-form__password">
                        <input
                            id="login-password"
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn login-form__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <div class="dialog__actions">
                        <button class="btn" type="button" disabled=busy on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || busy() || !ready()
                        >
                            {move || if busy() { "Signing in..." } else { "Secure Login" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
