use leptos::prelude::*;

/// Content card with an optional title and description header.
#[component]
pub fn Card(
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] description: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <Show when=move || title.get().is_some()>
                <div class="card__header">
                    <h3 class="card__title">{move || title.get().unwrap_or_default()}</h3>
                    <Show when=move || description.get().is_some()>
                        <p class="card__description">
                            {move || description.get().unwrap_or_default()}
                        </p>
                    </Show>
                </div>
            </Show>
            <div class="card__content">{children()}</div>
        </div>
    }
}
