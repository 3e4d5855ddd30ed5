use crate::routes::routes::AppRoutes;
use crate::shared::session::context::SessionProvider;
use crate::shared::theme::ThemeProvider;
use crate::shared::transition;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Animated navigation between pages; independent of any data component.
    transition::install();

    view! {
        <SessionProvider>
            <ThemeProvider>
                <AppRoutes />
            </ThemeProvider>
        </SessionProvider>
    }
}
