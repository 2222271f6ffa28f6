use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{CreateLeavePage, EditLeavePage, LeaveRequestsPage, LoginPage, ReceivedRequestsPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/leave-requests",
    "/leave-requests/received",
    "/leave-requests/create",
    "/leave-requests/:id/edit",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/leave-requests",
    "/leave-requests/received",
    "/leave-requests/create",
    "/leave-requests/:id/edit",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/leave-requests" view=ProtectedLeaveRequests/>
                    <Route path="/leave-requests/received" view=ProtectedReceivedRequests/>
                    <Route path="/leave-requests/create" view=ProtectedCreateLeave/>
                    <Route path="/leave-requests/:id/edit" view=ProtectedEditLeave/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedLeaveRequests() -> impl IntoView {
    view! { <RequireAuth><LeaveRequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedReceivedRequests() -> impl IntoView {
    view! { <RequireAuth><ReceivedRequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedCreateLeave() -> impl IntoView {
    view! { <RequireAuth><CreateLeavePage/></RequireAuth> }
}

#[component]
fn ProtectedEditLeave() -> impl IntoView {
    view! { <RequireAuth><EditLeavePage/></RequireAuth> }
}
