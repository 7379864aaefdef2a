//! Public landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::login_modal::LoginModal;
use crate::components::navbar::Navbar;
use crate::state::auth::{AuthState, use_auth};
use crate::state::roles::{HOME_ROUTE, route_for_role};

/// Dashboard to offer a signed-in user; `None` when it would be this page.
pub fn dashboard_link(state: &AuthState) -> Option<&'static str> {
    state
        .role()
        .map(route_for_role)
        .filter(|route| *route != HOME_ROUTE)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let show_login = RwSignal::new(false);

    let on_get_started = move |_| show_login.set(true);
    let on_close = Callback::new(move |()| show_login.set(false));

    view! {
        <Navbar/>
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"National Cancer Imaging Repository"</h1>
                <p class="home-page__subtitle">
                    "Secure, role-based access to de-identified oncology imaging for care, research and audit."
                </p>
                <div class="home-page__actions">
                    <button class="btn btn--primary" on:click=on_get_started>"Get Started"</button>
                    {move || {
                        dashboard_link(&auth.get())
                            .map(|href| view! { <a class="btn" href=href>"Go to dashboard"</a> })
                    }}
                </div>
            </section>
            <Show when=move || show_login.get()>
                <LoginModal on_close=on_close/>
            </Show>
        </div>
    }
}
