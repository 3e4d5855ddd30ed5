//! Theme management module for the application.
//!
//! Dark/light preference is persisted per user (key `theme_{user_id}`, plain
//! `theme` when nobody is logged in) and falls back to the operating system
//! preference when no key is set. Applying a theme toggles the `dark` class
//! on the document root.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::session::context::use_session;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as stored in localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from the stored string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Storage key for the theme preference of the given user (0 = anonymous).
fn storage_key(user_id: i64) -> String {
    if user_id != 0 {
        format!("theme_{}", user_id)
    } else {
        "theme".to_string()
    }
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Load theme from localStorage, falling back to the OS preference.
fn load_theme_from_storage(user_id: i64) -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(&storage_key(user_id)).ok().flatten());

    match stored {
        Some(s) => Theme::from_str(&s),
        None if prefers_dark() => Theme::Dark,
        None => Theme::Light,
    }
}

/// Save theme to localStorage under the user's key.
fn save_theme_to_storage(user_id: i64, theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(&storage_key(user_id), theme.as_str());
    }
}

/// Apply theme by toggling the `dark` class on the document root.
fn apply_theme(theme: Theme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(el) => el,
        None => return,
    };

    let class_list = root.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
    if result.is_err() {
        log::warn!("failed to apply theme class");
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    user_id: i64,
}

impl ThemeContext {
    /// Set the theme, persist it under the session user's key and apply it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(self.user_id, theme);
        apply_theme(theme);
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
///
/// Must sit inside `SessionProvider`: the storage key depends on the viewer.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let session = use_session();
    let user_id = session.user_id();

    let initial_theme = load_theme_from_storage(user_id);
    let theme = RwSignal::new(initial_theme);

    // Apply before first paint to avoid a flash of the wrong theme
    apply_theme(initial_theme);

    provide_context(ThemeContext { theme, user_id });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Dark/light toggle button for the header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="header-icon-btn"
            title="Toggle theme"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || match ctx.theme.get() {
                Theme::Dark => crate::shared::icons::icon("sun"),
                Theme::Light => crate::shared::icons::icon("moon"),
            }}
        </button>
    }
}
