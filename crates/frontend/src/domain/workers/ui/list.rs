use contracts::domain::jobs::DirectoryQuery;
use contracts::domain::workers::WorkerProfile;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::workers::api;
use crate::shared::number_format::format_ngn;

/// Workers directory with search and sorting.
#[component]
pub fn WorkersDirectory() -> impl IntoView {
    let workers = RwSignal::new(Vec::<WorkerProfile>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (sort_by, set_sort_by) = signal("rating".to_string());

    let load_workers = move || {
        let query = DirectoryQuery {
            q: Some(search.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
            sort_by: Some(sort_by.get_untracked()),
        };
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_workers(&query).await {
                Ok(list) => {
                    workers.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log!("Failed to fetch workers: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_workers();
    });

    view! {
        <div class="directory-page workers-directory">
            <h2>"Workers"</h2>

            <div class="directory-toolbar">
                <input
                    type="text"
                    placeholder="Search by skill or location..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            load_workers();
                        }
                    }
                />
                <select
                    prop:value=move || sort_by.get()
                    on:change=move |ev| {
                        set_sort_by.set(event_target_value(&ev));
                        load_workers();
                    }
                >
                    <option value="rating">"Best rated"</option>
                    <option value="rate_low">"Lowest rate"</option>
                    <option value="rate_high">"Highest rate"</option>
                </select>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load_workers() disabled=loading>
                    "Search"
                </Button>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading workers..."
                        </Flex>
                    }
                    .into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let list = workers.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No workers match your search."</p> }.into_any();
                }
                list.into_iter()
                    .map(|worker| {
                        let href = format!("/workers/{}", worker.id);
                        let location = worker.display_location();
                        let rate = worker
                            .daily_rate
                            .map(|r| format!("{}/day", format_ngn(r)))
                            .unwrap_or_default();
                        let rating = worker
                            .average_rating
                            .map(|r| format!("{:.1} ({})", r, worker.rating_count.unwrap_or(0)))
                            .unwrap_or_else(|| "Not rated".to_string());
                        view! {
                            <a class="directory-card" href=href>
                                <h3>{worker.full_name.unwrap_or_else(|| format!("Worker #{}", worker.id))}</h3>
                                <p class="card-meta">
                                    <span>{location}</span>
                                    <span>{rate}</span>
                                    <span>{rating}</span>
                                </p>
                                <p class="card-snippet">{worker.skills.unwrap_or_default()}</p>
                            </a>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
