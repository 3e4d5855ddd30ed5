use leptos::prelude::*;

use crate::shared::session::context::use_session;

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let logged_in = move || session.logged_in.get();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Farm labour, found fast"</h1>
                <p>
                    "Hire seasonal workers, list farmland or find your next job, "
                    "all in one place."
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href="/jobs">"Browse jobs"</a>
                    <a class="btn btn-secondary" href="/workers">"Find workers"</a>
                    <Show
                        when=logged_in
                        fallback=|| view! { <a class="btn btn-secondary" href="/login-page">"Sign in"</a> }
                    >
                        <a class="btn btn-secondary" href="/dashboard">"My dashboard"</a>
                    </Show>
                </div>
            </section>
        </div>
    }
}
