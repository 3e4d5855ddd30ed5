use contracts::system::audit::{unread_count, unread_ids, AuditLogEntry, AuditLogQuery, MarkReadRequest};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::session::context::use_session;
use crate::system::audit::api;

/// How many feed entries the panel shows.
const FEED_LIMIT: u32 = 10;

/// Header notification bell for admin accounts.
///
/// Shows the unread count of the recent activity feed and, when the panel is
/// opened, marks every currently-unread entry read. Reconciliation is a local
/// patch after the server acknowledges; the feed itself is only refetched on
/// mount.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let session = use_session();

    let activity = RwSignal::new(Vec::<AuditLogEntry>::new());
    let (open, set_open) = signal(false);

    // One fetch per page load
    Effect::new(move |_| {
        let query = AuditLogQuery {
            admin_id: session.viewer_id(),
            filter_admin_id: None,
            action: None,
            limit: Some(FEED_LIMIT),
        };
        spawn_local(async move {
            match api::fetch_audit_logs(&query).await {
                Ok(entries) => activity.set(entries),
                Err(e) => log!("Failed to fetch recent activity: {}", e),
            }
        });
    });

    let unread = move || activity.with(|a| unread_count(a));

    let toggle_panel = move |_| {
        let opening = !open.get_untracked();
        set_open.set(opening);
        if !opening {
            return;
        }

        // Opening the panel implicitly marks everything unread as read
        let ids = activity.with_untracked(|a| unread_ids(a));
        let Some(admin_id) = session.viewer_id() else {
            return;
        };
        if ids.is_empty() {
            return;
        }
        let request = MarkReadRequest::for_ids(admin_id, ids.clone());
        spawn_local(async move {
            match api::mark_read(&request).await {
                Ok(()) => activity.update(|entries| {
                    for entry in entries.iter_mut().filter(|e| ids.contains(&e.id)) {
                        entry.mark_read();
                    }
                }),
                Err(e) => log!("Failed to mark activity read: {}", e),
            }
        });
    };

    view! {
        <div class="notification-bell">
            <button class="header-icon-btn" title="Notifications" on:click=toggle_panel>
                {icon("bell")}
                <Show when={move || unread() > 0}>
                    <span class="notification-badge">{unread}</span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="notification-panel">
                    <h4>"Recent activity"</h4>
                    {move || {
                        let entries = activity.get();
                        if entries.is_empty() {
                            return view! { <p class="empty-state">"Nothing yet."</p> }.into_any();
                        }
                        entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="notification-row">
                                        <span class="notification-action">{entry.action.clone()}</span>
                                        <span class="notification-time">
                                            {format_datetime_opt(&entry.created_at)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
