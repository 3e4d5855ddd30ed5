use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::admin::AdminDashboard;
use crate::dashboards::user::UserDashboard;
use crate::domain::jobs::ui::details::JobDetailPage;
use crate::domain::jobs::ui::list::JobsDirectory;
use crate::domain::workers::ui::details::WorkerDetailPage;
use crate::domain::workers::ui::list::WorkersDirectory;
use crate::layout::shell::Shell;
use crate::system::audit::ui::AuditLogPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;

/// Route table of the client app.
///
/// The login page is server rendered and lives outside this table; guards
/// leave the client app with a full page load when they redirect there.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/dashboard") view=UserDashboard />
                    <Route path=path!("/admin/dashboard") view=AdminDashboard />
                    <Route path=path!("/admin/audit-logs") view=AuditLogPage />
                    <Route path=path!("/jobs") view=JobsDirectory />
                    <Route path=path!("/jobs/:id") view=JobDetailPage />
                    <Route path=path!("/workers") view=WorkersDirectory />
                    <Route path=path!("/workers/:id") view=WorkerDetailPage />
                </Routes>
            </Shell>
        </Router>
    }
}
