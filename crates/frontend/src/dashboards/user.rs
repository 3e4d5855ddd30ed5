use contracts::domain::jobs::Job;
use contracts::domain::listings::Listing;
use contracts::domain::work_contracts::WorkContract;
use contracts::system::session::AccountType;
use contracts::system::stats::WorkerDashboardStats;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::messages::ui::recent::RecentConversations;
use crate::domain::tasks::ui::TaskPanel;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_ngn};
use crate::shared::session::context::use_session;
use crate::shared::session::guard::{redirect_to, RequireLogin, BACK_OFFICE_ROLES};

/// Dashboard for regular accounts (farmers, workers, realtors).
///
/// Back-office roles land on their own dashboard instead. Every section
/// loads independently; a failed fetch degrades that section only.
#[component]
pub fn UserDashboard() -> impl IntoView {
    view! {
        <RequireLogin>
            <DashboardBody />
        </RequireLogin>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let session = use_session();
    let account_type = session.account_type();

    // Admins and moderators get the back-office dashboard; nothing below
    // is fetched while that redirect is in flight.
    if BACK_OFFICE_ROLES.contains(&account_type) {
        Effect::new(move |_| {
            redirect_to("/admin/dashboard");
        });
        return view! { <div class="guard-redirect">"Redirecting..."</div> }.into_any();
    }

    let user_id = session.user_id();
    let full_name = session.user.with_untracked(|u| u.full_name.clone());

    let contracts = RwSignal::new(Vec::<WorkContract>::new());
    let (contracts_error, set_contracts_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match crate::domain::work_contracts::api::fetch_my_contracts(user_id).await {
            Ok(list) => contracts.set(list),
            Err(e) => {
                log!("Failed to fetch contracts: {}", e);
                set_contracts_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="dashboard user-dashboard">
            <h2>{format!("Welcome back, {}", full_name)}</h2>

            {role_section(account_type, user_id)}

            <div class="dashboard-grid">
                <TaskPanel />
                <RecentConversations />

                <div class="contracts-panel card">
                    <h3>"My contracts"</h3>
                    {move || {
                        if let Some(err) = contracts_error.get() {
                            return view! { <p class="error-state">{err}</p> }.into_any();
                        }
                        let list = contracts.get();
                        if list.is_empty() {
                            return view! { <p class="empty-state">"No contracts yet."</p> }.into_any();
                        }
                        list.into_iter()
                            .map(|contract| {
                                let amount = contract.amount.map(format_ngn).unwrap_or_default();
                                view! {
                                    <div class="contract-row">
                                        <span class="contract-title">{contract.title}</span>
                                        <span class="contract-status">
                                            {contract.status.unwrap_or_default()}
                                        </span>
                                        <span class="contract-amount">{amount}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
    .into_any()
}

/// The section specific to the viewer's role.
fn role_section(account_type: AccountType, user_id: i64) -> AnyView {
    match account_type {
        AccountType::Farmer => view! { <FarmerJobsSection user_id=user_id /> }.into_any(),
        AccountType::Realtor => view! { <RealtorListingsSection user_id=user_id /> }.into_any(),
        AccountType::Worker => view! { <WorkerStatsSection user_id=user_id /> }.into_any(),
        _ => ().into_any(),
    }
}

#[component]
fn FarmerJobsSection(user_id: i64) -> impl IntoView {
    let jobs = RwSignal::new(Vec::<Job>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match crate::domain::jobs::api::fetch_my_jobs(user_id).await {
            Ok(list) => jobs.set(list),
            Err(e) => {
                log!("Failed to fetch my jobs: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="my-jobs-panel card">
            <h3>{icon("briefcase")} " My job postings"</h3>
            {move || {
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let list = jobs.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"You have not posted any jobs."</p> }
                        .into_any();
                }
                list.into_iter()
                    .map(|job| {
                        let href = format!("/jobs/{}", job.id);
                        view! {
                            <a class="job-row" href=href>
                                <span>{job.title}</span>
                                <span>{job.status.unwrap_or_default()}</span>
                                <span>{format_date_opt(&job.created_at)}</span>
                            </a>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn RealtorListingsSection(user_id: i64) -> impl IntoView {
    let listings = RwSignal::new(Vec::<Listing>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match crate::domain::listings::api::fetch_user_listings(user_id).await {
            Ok(list) => listings.set(list),
            Err(e) => {
                log!("Failed to fetch listings: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="my-listings-panel card">
            <h3>"My listings"</h3>
            {move || {
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let list = listings.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"You have no active listings."</p> }
                        .into_any();
                }
                list.into_iter()
                    .map(|listing| {
                        view! {
                            <div class="listing-row">
                                <span>{listing.title}</span>
                                <span>{listing.status.unwrap_or_default()}</span>
                                <span>{format_ngn(listing.price)}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn WorkerStatsSection(user_id: i64) -> impl IntoView {
    let stats = RwSignal::new(None::<WorkerDashboardStats>);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match crate::system::admin::api::fetch_worker_stats(user_id).await {
            Ok(s) => stats.set(Some(s)),
            Err(e) => {
                log!("Failed to fetch worker stats: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="worker-stats-panel card">
            <h3>"My work summary"</h3>
            {move || {
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let Some(current) = stats.get() else {
                    return view! { <Spinner /> }.into_any();
                };
                view! {
                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-value">{format_count(current.jobs_completed)}</span>
                            <span class="stat-label">"Jobs completed"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format_ngn(current.total_earnings)}</span>
                            <span class="stat-label">"Total earnings"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format!("{:.1}", current.rating)}</span>
                            <span class="stat-label">"Rating"</span>
                        </div>
                    </div>
                    <h4>"Recent applications"</h4>
                    {if current.recent_applications.is_empty() {
                        view! { <p class="empty-state">"No recent applications."</p> }.into_any()
                    } else {
                        current
                            .recent_applications
                            .into_iter()
                            .map(|app| {
                                view! {
                                    <div class="application-row">
                                        <span>{app.job_title.unwrap_or_default()}</span>
                                        <span>{app.status.unwrap_or_default()}</span>
                                        <span>{format_date_opt(&app.created_at)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                }
                .into_any()
            }}
        </div>
    }
}
