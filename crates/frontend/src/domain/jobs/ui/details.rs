use contracts::domain::jobs::{ApplyRequest, Job, JobApplication};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::jobs::api;
use crate::shared::date_utils::format_date_opt;
use crate::shared::dialog;
use crate::shared::session::context::use_session;
use crate::shared::session::guard::redirect_to;

fn job_id_from_route() -> i64 {
    use_params_map()
        .with_untracked(|p| p.get("id").and_then(|s| s.parse().ok()))
        .unwrap_or(0)
}

/// Job detail page with the apply flow.
///
/// Visitors can read the posting; applying requires a session. The posting
/// employer sees the received applications instead of the apply form.
#[component]
pub fn JobDetailPage() -> impl IntoView {
    let session = use_session();
    let job_id = job_id_from_route();

    let job = RwSignal::new(None::<Job>);
    let applications = RwSignal::new(Vec::<JobApplication>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (cover_letter, set_cover_letter) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let viewer_id = session.viewer_id();
    let is_employer = move || {
        job.with(|j| {
            matches!(
                (j.as_ref().and_then(|j| j.employer_id), viewer_id),
                (Some(e), Some(v)) if e == v
            )
        })
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_job(job_id).await {
                Ok(fetched) => {
                    let employer_id = fetched.employer_id;
                    job.set(Some(fetched));
                    set_error.set(None);

                    // The employer's own view lists the applications
                    if let (Some(e), Some(v)) = (employer_id, viewer_id) {
                        if e == v {
                            match api::fetch_applications(job_id, v).await {
                                Ok(list) => applications.set(list),
                                Err(e) => log!("Failed to fetch applications: {}", e),
                            }
                        }
                    }
                }
                Err(e) => {
                    log!("Failed to fetch job {}: {}", job_id, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let submit_application = move |_| {
        let Some(user_id) = viewer_id else {
            dialog::alert("Please log in to apply for jobs");
            redirect_to("/login-page");
            return;
        };
        if is_employer() {
            dialog::alert("You cannot apply to your own job");
            return;
        }
        let letter = cover_letter.get_untracked();
        if let Err(e) = contracts::domain::jobs::validate_cover_letter(&letter) {
            dialog::alert(&e);
            return;
        }
        let request = ApplyRequest {
            user_id,
            cover_letter: letter.trim().to_string(),
        };
        spawn_local(async move {
            set_submitting.set(true);
            match api::apply_for_job(job_id, request).await {
                Ok(()) => {
                    set_cover_letter.set(String::new());
                    dialog::alert("Application submitted");
                }
                Err(e) => {
                    log!("Failed to apply: {}", e);
                    dialog::alert(&format!("Failed to apply: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="job-detail-page">
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let Some(current) = job.get() else {
                    return view! { <p class="empty-state">"Job not found."</p> }.into_any();
                };
                view! {
                    <article class="job-detail card">
                        <h2>{current.title.clone()}</h2>
                        <p class="card-meta">
                            <span>{current.location.clone().unwrap_or_default()}</span>
                            <span>{current.salary_range.clone().unwrap_or_default()}</span>
                            <span>{format_date_opt(&current.created_at)}</span>
                        </p>
                        <p>{current.description.clone().unwrap_or_default()}</p>
                        {current.requirements.clone().map(|req| view! {
                            <h4>"Requirements"</h4>
                            <p>{req}</p>
                        })}
                    </article>
                }
                .into_any()
            }}

            <Show when=move || !loading.get() && error.get().is_none() && job.with(|j| j.is_some())>
                <Show
                    when=is_employer
                    fallback=move || {
                        view! {
                            <section class="apply-form card">
                                <h3>"Apply for this job"</h3>
                                <textarea
                                    placeholder="Tell the employer why you fit this job..."
                                    prop:value=move || cover_letter.get()
                                    on:input=move |ev| set_cover_letter.set(event_target_value(&ev))
                                ></textarea>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=submit_application
                                    disabled=submitting
                                >
                                    "Submit application"
                                </Button>
                            </section>
                        }
                    }
                >
                    <section class="applications card">
                        <h3>"Applications"</h3>
                        {move || {
                            let list = applications.get();
                            if list.is_empty() {
                                return view! { <p class="empty-state">"No applications yet."</p> }
                                    .into_any();
                            }
                            list.into_iter()
                                .map(|app| {
                                    view! {
                                        <div class="application-row">
                                            <span class="applicant-name">
                                                {app.applicant_name.unwrap_or_else(|| format!("Applicant #{}", app.applicant_id))}
                                            </span>
                                            <span class="application-status">
                                                {app.status.unwrap_or_default()}
                                            </span>
                                            <p>{app.cover_letter.unwrap_or_default()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </section>
                </Show>
            </Show>
        </div>
    }
}
