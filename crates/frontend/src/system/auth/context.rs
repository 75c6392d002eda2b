use contracts::system::auth::AuthCheck;
use leptos::prelude::*;

use super::storage;

/// Read the session flags once and provide the snapshot to the whole app.
/// Returns the signal so the caller can keep a handle without a second
/// context lookup.
pub fn provide_auth() -> RwSignal<AuthCheck> {
    let auth = RwSignal::new(storage::load_session());
    provide_context(auth);
    auth
}

pub fn use_auth() -> RwSignal<AuthCheck> {
    use_context::<RwSignal<AuthCheck>>().expect("auth context not provided")
}
