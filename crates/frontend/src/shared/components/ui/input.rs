use leptos::prelude::*;

/// Text input with an optional label.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Input type, defaults to "text".
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="input">
            <Show when=move || label.get().is_some()>
                <span class="input__label">{move || label.get().unwrap_or_default()}</span>
            </Show>
            <input
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </label>
    }
}
