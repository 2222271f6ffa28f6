use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LeaveFormPanel;
use view_model::FormMode;

#[component]
pub fn CreateLeavePage() -> impl IntoView {
    view! { <LeaveFormPanel mode=FormMode::Create /> }
}

#[component]
pub fn EditLeavePage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|map| map.get("id").cloned().unwrap_or_default());
    // Remount the form when the route id changes.
    move || view! { <LeaveFormPanel mode=FormMode::Edit(id()) /> }
}
