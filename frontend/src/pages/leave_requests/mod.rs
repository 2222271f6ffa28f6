use leptos::*;

pub mod components;
pub mod repository;
pub mod types;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LeaveRequestsPanel;
use types::ListScope;

#[component]
pub fn LeaveRequestsPage() -> impl IntoView {
    view! { <LeaveRequestsPanel scope=ListScope::Mine /> }
}

#[component]
pub fn ReceivedRequestsPage() -> impl IntoView {
    view! { <LeaveRequestsPanel scope=ListScope::Received /> }
}
