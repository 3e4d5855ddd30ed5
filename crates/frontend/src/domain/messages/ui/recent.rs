use contracts::domain::messages::ConversationPreview;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::messages::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::session::context::use_session;

/// How many conversation previews the dashboard shows.
const RECENT_LIMIT: usize = 3;

/// Most recent conversations widget.
///
/// Merges the sent and received streams into one preview per partner,
/// newest first, capped at three.
#[component]
pub fn RecentConversations() -> impl IntoView {
    let session = use_session();
    let user_id = session.user_id();

    let previews = RwSignal::new(Vec::<ConversationPreview>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_messages(user_id).await {
                Ok(response) => {
                    previews.set(ConversationPreview::aggregate(
                        user_id,
                        &response.sent,
                        &response.received,
                        RECENT_LIMIT,
                    ));
                    set_error.set(None);
                }
                Err(e) => {
                    log!("Failed to fetch messages: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="recent-conversations card">
            <h3>{icon("message")} " Recent messages"</h3>

            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let items = previews.get();
                if items.is_empty() {
                    return view! { <p class="empty-state">"No conversations yet."</p> }.into_any();
                }
                items
                    .into_iter()
                    .map(|preview| {
                        let href = format!("/messages?recipient={}", preview.partner_id);
                        view! {
                            <a class="conversation-row" href=href>
                                <span class="conversation-partner">{preview.partner_name}</span>
                                <span class="conversation-snippet">{preview.last_message}</span>
                                <span class="conversation-time">{format_datetime(&preview.time)}</span>
                            </a>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
