use leptos::*;

pub const WORKING_TIME_MENU: &str = "Working Time";
pub const LEAVE_REQUEST_MENU: &str = "Leave Request";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const LEAVE_REQUEST_LINKS: &[NavLink] = &[
    NavLink {
        label: "My Request",
        href: "/leave-requests",
    },
    NavLink {
        label: "Create Request",
        href: "/leave-requests/create",
    },
    NavLink {
        label: "Received Request List",
        href: "/leave-requests/received",
    },
];

/// Expanded state of the two nested menus. Both start open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub working_time_open: bool,
    pub leave_request_open: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            working_time_open: true,
            leave_request_open: true,
        }
    }
}

impl MenuState {
    pub fn toggle_working_time(&mut self) {
        self.working_time_open = !self.working_time_open;
    }

    pub fn toggle_leave_request(&mut self) {
        self.leave_request_open = !self.leave_request_open;
    }

    pub fn shows_links(&self) -> bool {
        self.working_time_open && self.leave_request_open
    }
}

fn chevron(open: bool) -> &'static str {
    if open {
        "▾"
    } else {
        "▸"
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let menu = create_rw_signal(MenuState::default());
    let working_time_open = move || menu.get().working_time_open;
    let links_open = move || menu.get().shows_links();

    view! {
        <aside class="w-64 shrink-0 bg-surface-elevated border-r border-border min-h-screen">
            <div class="h-16 flex items-center px-6 border-b border-border">
                <a href="/leave-requests" class="text-xl font-bold text-action-primary-bg">"TMS"</a>
            </div>
            <nav class="px-3 py-4 space-y-1 text-sm">
                <button
                    type="button"
                    class="w-full flex items-center justify-between px-3 py-2 rounded-md font-medium text-fg hover:bg-action-ghost-bg-hover"
                    aria-expanded=move || working_time_open().to_string()
                    on:click=move |_| menu.update(|state| state.toggle_working_time())
                >
                    <span>{WORKING_TIME_MENU}</span>
                    <span>{move || chevron(working_time_open())}</span>
                </button>
                <Show when=working_time_open>
                    <div class="pl-4 space-y-1">
                        <button
                            type="button"
                            class="w-full flex items-center justify-between px-3 py-2 rounded-md text-fg hover:bg-action-ghost-bg-hover"
                            aria-expanded=move || links_open().to_string()
                            on:click=move |_| menu.update(|state| state.toggle_leave_request())
                        >
                            <span>{LEAVE_REQUEST_MENU}</span>
                            <span>{move || chevron(links_open())}</span>
                        </button>
                        <Show when=links_open>
                            <ul class="pl-4 space-y-1">
                                {LEAVE_REQUEST_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <li>
                                                <a
                                                    href=link.href
                                                    class="block px-3 py-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                                >
                                                    {link.label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </div>
                </Show>
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_toggle_independently() {
        let mut state = MenuState::default();
        assert!(state.shows_links());

        state.toggle_leave_request();
        assert!(!state.shows_links());
        assert!(state.working_time_open);

        state.toggle_leave_request();
        state.toggle_working_time();
        assert!(!state.shows_links());
        assert!(state.leave_request_open);
    }

    #[test]
    fn links_cover_leave_request_routes() {
        let hrefs: Vec<_> = LEAVE_REQUEST_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(
            hrefs,
            vec![
                "/leave-requests",
                "/leave-requests/create",
                "/leave-requests/received"
            ]
        );
    }
}
