use contracts::system::session::{AccountType, SessionUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session state for the page lifetime.
///
/// Loaded from localStorage exactly once, when the app mounts; every view
/// model receives it through context instead of re-reading storage ad hoc.
/// It is refreshed only at defined boundaries: login (full page load),
/// logout, explicit reload.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<SessionUser>,
    pub logged_in: RwSignal<bool>,
}

impl SessionContext {
    fn load() -> Self {
        Self {
            user: RwSignal::new(storage::load_user()),
            logged_in: RwSignal::new(storage::is_logged_in()),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user.with_untracked(|u| u.id)
    }

    pub fn account_type(&self) -> AccountType {
        self.user.with_untracked(|u| u.account_type)
    }

    /// The viewer's id when a real session user is present.
    pub fn viewer_id(&self) -> Option<i64> {
        let id = self.user_id();
        (id != 0).then_some(id)
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::load());
    children()
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}

/// Clear the server session and every client session key, then leave for the
/// landing page. The server call is best effort; local state is cleared
/// either way.
pub fn do_logout(session: SessionContext) {
    spawn_local(async move {
        if let Err(e) = api::logout().await {
            log::warn!("logout request failed: {}", e);
        }
        storage::clear_session();
        session.user.set(SessionUser::default());
        session.logged_in.set(false);
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href("/");
        }
    });
}
