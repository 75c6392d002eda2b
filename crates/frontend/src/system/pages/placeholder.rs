use leptos::prelude::*;

/// Titled stub for menu targets without a dedicated screen. Keeps the
/// embedded frame reaching document readiness instead of 404-spinning.
#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page page--placeholder">
            <h2>{title}</h2>
            <p>"该功能正在建设中，敬请期待。"</p>
        </div>
    }
}
