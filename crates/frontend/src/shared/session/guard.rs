use contracts::system::session::AccountType;
use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::context::use_session;

/// Roles allowed on the plain admin surfaces (dashboard, audit logs).
pub static ADMIN_ROLES: Lazy<HashSet<AccountType>> =
    Lazy::new(|| HashSet::from([AccountType::Admin, AccountType::SuperAdmin]));

/// Back-office roles redirected away from the regular user dashboard.
pub static BACK_OFFICE_ROLES: Lazy<HashSet<AccountType>> = Lazy::new(|| {
    HashSet::from([
        AccountType::Admin,
        AccountType::SuperAdmin,
        AccountType::Moderator,
    ])
});

/// Full-page navigation; guards leave the SPA the same way the original
/// pages did.
pub fn redirect_to(path: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.location().set_href(path);
    }
}

/// Requires a logged-in session; otherwise redirects to the server-rendered
/// login page.
#[component]
pub fn RequireLogin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    Effect::new(move |_| {
        if !session.logged_in.get() {
            redirect_to("/login-page");
        }
    });

    view! {
        <Show
            when=move || session.logged_in.get()
            fallback=|| view! { <div class="guard-redirect">"Redirecting to login..."</div> }
        >
            {children()}
        </Show>
    }
}

/// Requires an admin-type account; others are sent to the regular dashboard.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    let allowed = move || {
        session.logged_in.get()
            && session
                .user
                .with(|u| ADMIN_ROLES.contains(&u.account_type))
    };

    Effect::new(move |_| {
        if !session.logged_in.get() {
            redirect_to("/login-page");
        } else if !session
            .user
            .with(|u| ADMIN_ROLES.contains(&u.account_type))
        {
            redirect_to("/dashboard");
        }
    });

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="guard-redirect">"Redirecting..."</div> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_office_roles_gate_the_user_dashboard() {
        // Roles in this set are redirected before any dashboard fetch runs.
        for role in [
            AccountType::Admin,
            AccountType::SuperAdmin,
            AccountType::Moderator,
        ] {
            assert!(BACK_OFFICE_ROLES.contains(&role), "{:?} must redirect", role);
        }
        for role in [
            AccountType::Farmer,
            AccountType::Worker,
            AccountType::Realtor,
            AccountType::Unknown,
        ] {
            assert!(!BACK_OFFICE_ROLES.contains(&role), "{:?} must stay", role);
        }
    }

    #[test]
    fn test_moderator_is_back_office_but_not_admin() {
        assert!(!ADMIN_ROLES.contains(&AccountType::Moderator));
        assert!(BACK_OFFICE_ROLES.contains(&AccountType::Moderator));
    }
}
