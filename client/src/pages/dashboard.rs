//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route renders the same guarded shell; only the required
//! role differs. Wrong-role sessions are redirected by `RoleGuard` before the
//! shell is shown.

use leptos::prelude::*;

use crate::components::dashboard_nav::DashboardNav;
use crate::state::roles::Role;
use crate::util::auth::RoleGuard;

/// Guarded dashboard shell for `role`.
#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    view! {
        <RoleGuard required=role>
            <div class="dashboard-page">
                <DashboardNav role=role/>
                <main class="dashboard-page__body">
                    <h1 class="dashboard-page__title">{format!("{} Dashboard", role.display_name())}</h1>
                    <p class="dashboard-page__empty">"Your workspace is ready."</p>
                </main>
            </div>
        </RoleGuard>
    }
}

#[component]
pub fn SuperAdminDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::SuperAdmin/> }
}

#[component]
pub fn ContributorDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Contributor/> }
}

#[component]
pub fn AnnotatorDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Annotator/> }
}

#[component]
pub fn ResearcherDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Researcher/> }
}

#[component]
pub fn EthicsOfficerDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::EthicsOfficer/> }
}
