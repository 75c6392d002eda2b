use leptos::prelude::*;

/// Status badge: "ok", "warn" or neutral.
#[component]
pub fn Badge(#[prop(optional, into)] variant: MaybeProp<String>, children: Children) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("ok") => "badge--ok",
        Some("warn") => "badge--warn",
        _ => "badge--neutral",
    };

    view! { <span class=move || format!("badge {}", variant_class())>{children()}</span> }
}
