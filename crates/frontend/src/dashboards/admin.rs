use contracts::domain::wallet::WalletBalance;
use contracts::system::stats::AdminStats;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::number_format::{format_count, format_ngn};
use crate::shared::session::context::use_session;
use crate::shared::session::guard::RequireAdmin;

/// Back-office dashboard: platform counters plus the admin's wallet.
///
/// Both fetches start together and the page renders once both have
/// settled, tracked by a pending counter.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminDashboardBody />
        </RequireAdmin>
    }
}

#[component]
fn AdminDashboardBody() -> impl IntoView {
    let session = use_session();
    let admin_id = session.user_id();

    let stats = RwSignal::new(AdminStats::default());
    let wallet = RwSignal::new(WalletBalance::default());
    let (pending, set_pending) = signal(2_u32);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match crate::system::admin::api::fetch_admin_stats(admin_id).await {
            Ok(s) => stats.set(s),
            Err(e) => {
                log!("Failed to fetch admin stats: {}", e);
                set_error.set(Some(e));
            }
        }
        set_pending.update(|p| *p -= 1);
    });

    spawn_local(async move {
        match crate::domain::wallet::api::fetch_balance(admin_id).await {
            Ok(b) => wallet.set(b),
            Err(e) => {
                log!("Failed to fetch wallet balance: {}", e);
                set_error.set(Some(e));
            }
        }
        set_pending.update(|p| *p -= 1);
    });

    view! {
        <div class="dashboard admin-dashboard">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2>"Admin dashboard"</h2>
                <a href="/admin/audit-logs">"Audit logs"</a>
            </Flex>

            {move || {
                if pending.get() > 0 {
                    return view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading dashboard..."
                        </Flex>
                    }
                    .into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p class="error-state">{err}</p> }.into_any();
                }
                let s = stats.get();
                let w = wallet.get();
                view! {
                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-value">{format_count(s.users)}</span>
                            <span class="stat-label">"Users"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format_count(s.jobs)}</span>
                            <span class="stat-label">"Jobs"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format_count(s.listings)}</span>
                            <span class="stat-label">"Listings"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format_count(s.pending_verifications)}</span>
                            <span class="stat-label">"Pending verifications"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format_ngn(s.total_revenue)}</span>
                            <span class="stat-label">"Total revenue"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format_ngn(w.balance)}</span>
                            <span class="stat-label">{format!("Wallet ({})", w.currency)}</span>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
