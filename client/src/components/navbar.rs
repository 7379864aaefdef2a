//! Public site header with the session controls.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::login_modal::LoginModal;
use crate::net::types::User;
use crate::state::auth::{SessionContext, use_auth};
use crate::state::roles::{HOME_ROUTE, display_name_for};

pub fn greeting(user: &User) -> String {
    format!("Hi, {}", user.label())
}

/// Brand, section links, and either "Hi, name" + Logout or a Login button.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let session = expect_context::<SessionContext>();
    let show_login = RwSignal::new(false);

    let on_close = Callback::new(move |()| show_login.set(false));
    let on_logout = move |_| session.get_value().logout();

    let greeting_text = move || auth.get().user.as_ref().map(greeting).unwrap_or_default();
    let role_name = move || auth.get().role().map(display_name_for).unwrap_or_default();

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=HOME_ROUTE>"NCIR"</a>
            <nav class="navbar__links">
                <a class="navbar__link" href="#about">"About"</a>
                <a class="navbar__link" href="#research">"Research"</a>
                <a class="navbar__link" href="#compliance">"Compliance"</a>
            </nav>
            <span class="toolbar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! {
                        <button class="btn btn--primary" on:click=move |_| show_login.set(true)>
                            "Login"
                        </button>
                    }
                }
            >
                <span class="navbar__greeting">{greeting_text}</span>
                <span class="navbar__role">{role_name}</span>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </Show>
        </header>
        <Show when=move || show_login.get()>
            <LoginModal on_close=on_close/>
        </Show>
    }
}
