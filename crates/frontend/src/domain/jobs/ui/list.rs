use contracts::domain::jobs::{DirectoryQuery, Job};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::jobs::api;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;

/// Sort values the jobs endpoint recognizes; anything else comes back
/// unsorted.
const DEFAULT_SORT: &str = "recent";
const SORT_OPTIONS: [(&str, &str); 2] = [("recent", "Newest first"), ("salary_high", "Highest salary")];

/// Public jobs directory with search and sorting.
#[component]
pub fn JobsDirectory() -> impl IntoView {
    let jobs = RwSignal::new(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (sort_by, set_sort_by) = signal(DEFAULT_SORT.to_string());

    let load_jobs = move || {
        let query = DirectoryQuery {
            q: Some(search.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
            sort_by: Some(sort_by.get_untracked()),
        };
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_jobs(&query).await {
                Ok(list) => {
                    jobs.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log!("Failed to fetch jobs: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load
    Effect::new(move |_| {
        load_jobs();
    });

    view! {
        <div class="directory-page jobs-directory">
            <h2>{icon("briefcase")} " Jobs"</h2>

            <div class="directory-toolbar">
                <input
                    type="text"
                    placeholder="Search jobs..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            load_jobs();
                        }
                    }
                />
                <select
                    prop:value=move || sort_by.get()
                    on:change=move |ev| {
                        set_sort_by.set(event_target_value(&ev));
                        load_jobs();
                    }
                >
                    {SORT_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load_jobs() disabled=loading>
                    "Search"
                </Button>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading jobs..."
                        </Flex>
                    }
                    .into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let list = jobs.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No jobs match your search."</p> }.into_any();
                }
                list.into_iter()
                    .map(|job| {
                        let href = format!("/jobs/{}", job.id);
                        view! {
                            <a class="directory-card" href=href>
                                <h3>{job.title}</h3>
                                <p class="card-meta">
                                    <span>{job.location.unwrap_or_default()}</span>
                                    <span>{job.salary_range.unwrap_or_default()}</span>
                                    <span>{format_date_opt(&job.created_at)}</span>
                                </p>
                                <p class="card-snippet">{job.description.unwrap_or_default()}</p>
                            </a>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The endpoint only orders for "recent" (created_at desc) and
    // "salary_high"; any other value silently returns unsorted rows.
    const SERVER_SORT_VALUES: [&str; 2] = ["recent", "salary_high"];

    #[test]
    fn test_default_sort_is_server_recognized() {
        assert!(SERVER_SORT_VALUES.contains(&DEFAULT_SORT));

        let query = DirectoryQuery {
            q: None,
            sort_by: Some(DEFAULT_SORT.to_string()),
        };
        assert_eq!(serde_qs::to_string(&query).unwrap(), "sort_by=recent");
    }

    #[test]
    fn test_every_offered_sort_is_server_recognized() {
        for (value, _) in SORT_OPTIONS {
            assert!(
                SERVER_SORT_VALUES.contains(&value),
                "sort option {:?} would fall through to unsorted results",
                value
            );
        }
    }
}
