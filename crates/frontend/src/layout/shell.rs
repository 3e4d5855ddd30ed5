use leptos::prelude::*;

use super::header::Header;

/// Page chrome around every routed view.
///
/// The main element carries the id and enter class the transition
/// controller animates on navigation.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Header />
            <main id="main-content" class="page-enter">
                {children()}
            </main>
        </div>
    }
}
