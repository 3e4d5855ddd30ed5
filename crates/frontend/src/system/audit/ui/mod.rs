pub mod state;

use self::state::create_state;
use contracts::system::audit::{unread_count, AuditLogQuery, MarkReadRequest};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

use crate::shared::date_utils::format_datetime_opt;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::session::context::use_session;
use crate::shared::session::guard::RequireAdmin;

/// The `admin_id` query parameter, the fallback when the session carries no
/// admin id (a super admin may open a colleague's feed by link).
fn admin_id_from_query() -> Option<i64> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("admin_id").and_then(|s| s.parse().ok())
}

/// Audit log review page for super admins.
#[component]
pub fn AuditLogPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AuditLogList />
        </RequireAdmin>
    }
}

#[component]
fn AuditLogList() -> impl IntoView {
    let session = use_session();

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (filter_admin_id, set_filter_admin_id) = signal(String::new());
    let (filter_action, set_filter_action) = signal(String::new());

    let resolve_admin_id = move || session.viewer_id().or_else(admin_id_from_query);

    let load_logs = move || {
        let query = AuditLogQuery {
            admin_id: resolve_admin_id(),
            filter_admin_id: filter_admin_id.get_untracked().trim().parse().ok(),
            action: Some(filter_action.get_untracked().trim().to_string())
                .filter(|s| !s.is_empty()),
            limit: None,
        };
        spawn_local(async move {
            set_loading.set(true);
            match crate::system::audit::api::fetch_audit_logs(&query).await {
                Ok(logs) => state.update(|s| {
                    s.logs = logs;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log!("Failed to load audit logs: {}", e);
                    dialog::alert(&format!("Failed to load audit logs: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_logs();
        }
    });

    // Session admin id, else an interactive prompt; commands without an
    // authorizing id are blocked client-side.
    let authorizing_admin_id = move || -> Option<i64> {
        resolve_admin_id().or_else(|| {
            dialog::prompt("Enter admin id to authorize mark-read:").and_then(|s| s.parse().ok())
        })
    };

    let mark_selected_read = move |_| {
        let ids = state.with_untracked(|s| s.selected.clone());
        if ids.is_empty() {
            dialog::alert("No logs selected");
            return;
        }
        let Some(admin_id) = authorizing_admin_id() else {
            dialog::alert("admin_id required");
            return;
        };
        let request = MarkReadRequest::for_ids(admin_id, ids.clone());
        spawn_local(async move {
            match crate::system::audit::api::mark_read(&request).await {
                Ok(()) => state.update(|s| {
                    s.patch_read(&ids);
                    s.selected.clear();
                }),
                Err(e) => {
                    log!("mark-read failed: {}", e);
                    dialog::alert(&format!("Failed to mark logs read: {}", e));
                }
            }
        });
    };

    let mark_all_read = move |_| {
        // Nothing is sent unless the admin confirms
        if !dialog::confirm("Mark ALL audit logs as read?") {
            return;
        }
        let Some(admin_id) = authorizing_admin_id() else {
            dialog::alert("admin_id required");
            return;
        };
        let request = MarkReadRequest::for_all(admin_id);
        spawn_local(async move {
            match crate::system::audit::api::mark_read(&request).await {
                Ok(()) => state.update(|s| {
                    let all_ids: Vec<i64> = s.logs.iter().map(|e| e.id).collect();
                    s.patch_read(&all_ids);
                }),
                Err(e) => {
                    log!("mark-all failed: {}", e);
                    dialog::alert(&format!("Failed to mark all read: {}", e));
                }
            }
        });
    };

    view! {
        <div class="audit-log-page">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2>"Audit logs"</h2>
                <span class="unread-summary">
                    {move || state.with(|s| format!("{} unread", unread_count(&s.logs)))}
                </span>
            </Flex>

            <div class="audit-filters">
                <input
                    type="text"
                    placeholder="Filter by admin id"
                    prop:value=move || filter_admin_id.get()
                    on:input=move |ev| set_filter_admin_id.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Filter by action"
                    prop:value=move || filter_action.get()
                    on:input=move |ev| set_filter_action.set(event_target_value(&ev))
                />
                <Space>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_logs() disabled=loading>
                        {icon("refresh")}
                        " Reload"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=mark_selected_read>
                        "Mark selected read"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=mark_all_read>
                        "Mark all read"
                    </Button>
                </Space>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 40px;"></TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Admin"</TableHeaderCell>
                        <TableHeaderCell>"Action"</TableHeaderCell>
                        <TableHeaderCell>"Target"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 150px;">"When"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        let logs = state.get().logs;
                        if logs.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                        "No audit logs"
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        logs.into_iter()
                            .map(|entry| {
                                let id = entry.id;
                                let selected = move || state.with(|s| s.selected.contains(&id));
                                let unread = entry.is_unread();
                                let target = match (&entry.target_type, entry.target_id) {
                                    (Some(t), Some(tid)) => format!("{} #{}", t, tid),
                                    (Some(t), None) => t.clone(),
                                    _ => "—".to_string(),
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=selected
                                                    on:change=move |_| state.update(|s| s.toggle_selected(id))
                                                />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{entry.admin_id}</TableCell>
                                        <TableCell>{entry.action.clone()}</TableCell>
                                        <TableCell>{target}</TableCell>
                                        <TableCell>{format_datetime_opt(&entry.created_at)}</TableCell>
                                        <TableCell>
                                            {if unread {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"unread"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge appearance=BadgeAppearance::Tint>"read"</Badge> }.into_any()
                                            }}
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
