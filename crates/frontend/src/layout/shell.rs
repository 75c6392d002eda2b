use leptos::prelude::*;

/// Console shell.
///
/// ```text
/// +------------------------------------------+
/// |              ConsoleHeader               |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// |  (left)   |   (tab strip + panes)        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<H, L, C>(header: H, left: L, center: C) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {header()}
            <div class="app-body">
                <div data-zone="left" class="app-sidebar">{left()}</div>
                <div data-zone="center" class="app-main">{center()}</div>
            </div>
        </div>
    }
}
