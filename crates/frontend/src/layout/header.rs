use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::session::context::{do_logout, use_session};
use crate::shared::session::guard::ADMIN_ROLES;
use crate::shared::theme::ThemeToggle;
use crate::system::notifications::panel::NotificationBell;

/// Site header with navigation, theme toggle and session controls.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);

    let logged_in = move || session.logged_in.get();
    let is_admin = move || {
        session.logged_in.get()
            && session
                .user
                .with(|u| ADMIN_ROLES.contains(&u.account_type))
    };

    view! {
        <header class="site-header">
            <a class="site-logo" href="/">"FarmLink"</a>

            <button
                class="mobile-menu-toggle"
                title="Menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>

            <nav class=move || {
                if menu_open.get() {
                    "site-nav open"
                } else {
                    "site-nav"
                }
            }>
                <a href="/jobs">"Jobs"</a>
                <a href="/workers">"Workers"</a>
                <Show when=logged_in>
                    <a href="/dashboard">"Dashboard"</a>
                </Show>
                <Show when=is_admin>
                    <a href="/admin/dashboard">"Admin"</a>
                </Show>
            </nav>

            <div class="header-actions">
                <Show when=is_admin>
                    <NotificationBell />
                </Show>
                <ThemeToggle />
                <Show
                    when=logged_in
                    fallback=|| view! { <a class="btn btn-secondary" href="/login-page">"Sign in"</a> }
                >
                    <button class="btn btn-secondary" on:click=move |_| do_logout(session)>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
