use contracts::system::session::{parse_session_user, SessionUser};
use web_sys::window;

const USER_KEY: &str = "flb_user";
const LOGGED_IN_KEY: &str = "is_logged_in";
const ACCESS_TOKEN_KEY: &str = "access_token";
const USER_EMAIL_KEY: &str = "user_email";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Read the persisted user record from localStorage.
///
/// Absent or malformed content yields the default (empty) user.
pub fn load_user() -> SessionUser {
    let raw = get_item(USER_KEY);
    parse_session_user(raw.as_deref())
}

/// Whether the login flow has set the logged-in flag.
pub fn is_logged_in() -> bool {
    get_item(LOGGED_IN_KEY).as_deref() == Some("true")
}

/// Remove every session key. Used by logout.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(LOGGED_IN_KEY);
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_EMAIL_KEY);
    }
}
