use contracts::domain::workers::WorkerProfile;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::workers::api;
use crate::shared::number_format::format_ngn;

fn worker_id_from_route() -> i64 {
    use_params_map()
        .with_untracked(|p| p.get("id").and_then(|s| s.parse().ok()))
        .unwrap_or(0)
}

/// Worker profile page.
#[component]
pub fn WorkerDetailPage() -> impl IntoView {
    let worker_id = worker_id_from_route();

    let worker = RwSignal::new(None::<WorkerProfile>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_worker(worker_id).await {
                Ok(profile) => {
                    worker.set(Some(profile));
                    set_error.set(None);
                }
                Err(e) => {
                    log!("Failed to fetch worker {}: {}", worker_id, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="worker-detail-page">
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let Some(profile) = worker.get() else {
                    return view! { <p class="empty-state">"Worker not found."</p> }.into_any();
                };
                let location = profile.display_location();
                let rate = profile
                    .daily_rate
                    .map(|r| format!("{}/day", format_ngn(r)))
                    .unwrap_or_else(|| "Rate on request".to_string());
                let rating = profile
                    .average_rating
                    .map(|r| format!("{:.1} from {} ratings", r, profile.rating_count.unwrap_or(0)))
                    .unwrap_or_else(|| "Not rated yet".to_string());
                let message_href = profile
                    .user_id
                    .map(|uid| format!("/messages?recipient={}", uid));
                view! {
                    <article class="worker-detail card">
                        <h2>{profile.full_name.clone().unwrap_or_else(|| format!("Worker #{}", profile.id))}</h2>
                        <p class="card-meta">
                            <span>{location}</span>
                            <span>{rate}</span>
                            <span>{rating}</span>
                        </p>
                        <h4>"Skills"</h4>
                        <p>{profile.skills.clone().unwrap_or_default()}</p>
                        {profile.bio.clone().map(|bio| view! {
                            <h4>"About"</h4>
                            <p>{bio}</p>
                        })}
                        {message_href.map(|href| view! {
                            <a class="btn btn-primary" href=href>"Send a message"</a>
                        })}
                    </article>
                }
                .into_any()
            }}
        </div>
    }
}
