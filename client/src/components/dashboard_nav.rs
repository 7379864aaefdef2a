//! Header chrome for role dashboards.

use leptos::prelude::*;

use crate::state::auth::{SessionContext, use_auth};
use crate::state::roles::Role;

/// Role badge, per-role navigation, signed-in identity and logout.
#[component]
pub fn DashboardNav(role: Role) -> impl IntoView {
    let auth = use_auth();
    let session = expect_context::<SessionContext>();

    let identity = move || {
        auth.get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.label().to_owned())
    };
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| session.get_value().logout();

    view! {
        <header class="dashboard-nav toolbar">
            <span class=role.badge_class()>{role.display_name()}</span>
            <nav class="dashboard-nav__links">
                {role
                    .nav_items()
                    .iter()
                    .map(|item| view! { <a class="dashboard-nav__link" href=item.href>{item.title}</a> })
                    .collect_view()}
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="dashboard-nav__identity" title=email>{identity}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
