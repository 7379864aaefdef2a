//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AuthConfig;
use crate::pages::dashboard::{
    AnnotatorDashboard, ContributorDashboard, EthicsOfficerDashboard, ResearcherDashboard,
    SuperAdminDashboard,
};
use crate::pages::home::HomePage;
use crate::state::auth::{provide_session, use_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session(AuthConfig::default());

    // Adopt the persisted session after mount so server and client render the
    // same signed-out markup first.
    let store = use_session();
    Effect::new(move || {
        store.rehydrate();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ncir-portal.css"/>
        <Title text="NCIR Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("superadmin"))
                    view=SuperAdminDashboard
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("contributor"))
                    view=ContributorDashboard
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("annotator"))
                    view=AnnotatorDashboard
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("researcher"))
                    view=ResearcherDashboard
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("ethicsofficer"))
                    view=EthicsOfficerDashboard
                />
            </Routes>
        </Router>
    }
}
