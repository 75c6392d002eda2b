use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::system::auth::context::provide_auth;

#[component]
pub fn App() -> impl IntoView {
    provide_auth();

    view! { <AppRoutes /> }
}
