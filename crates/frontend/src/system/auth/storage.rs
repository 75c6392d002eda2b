//! Local session flag store.
//!
//! The consoles consult this exactly once at mount; everything after that
//! goes through the [`AuthCheck`] snapshot in context.

use contracts::system::auth::{AuthCheck, ConsoleRole, SessionInfo};
use web_sys::window;

const LOGGED_IN_KEY: &str = "console_logged_in";
const IDENTITY_KEY: &str = "console_identity";
const ROLE_KEY: &str = "console_role";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the session flags. Absent or malformed flags mean `Anonymous`;
/// a missing role falls back to the least-privileged one.
pub fn load_session() -> AuthCheck {
    let Some(storage) = local_storage() else {
        return AuthCheck::Anonymous;
    };
    if storage.get_item(LOGGED_IN_KEY).ok().flatten().as_deref() != Some("true") {
        return AuthCheck::Anonymous;
    }
    let email = match storage.get_item(IDENTITY_KEY).ok().flatten() {
        Some(email) if !email.is_empty() => email,
        _ => return AuthCheck::Anonymous,
    };
    let role = storage
        .get_item(ROLE_KEY)
        .ok()
        .flatten()
        .and_then(|role| ConsoleRole::from_str(&role))
        .unwrap_or(ConsoleRole::User);
    AuthCheck::Authenticated(SessionInfo::new(email, role))
}

pub fn save_session(info: &SessionInfo) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LOGGED_IN_KEY, "true");
        let _ = storage.set_item(IDENTITY_KEY, &info.email);
        let _ = storage.set_item(ROLE_KEY, info.role.as_str());
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(LOGGED_IN_KEY);
        let _ = storage.remove_item(IDENTITY_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
