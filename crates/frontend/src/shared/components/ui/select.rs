use leptos::prelude::*;

/// Select with (value, label) options.
#[component]
pub fn Select(
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <select
            class="select"
            prop:value=move || value.get()
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            {options
                .into_iter()
                .map(|(option_value, option_label)| {
                    let selected = {
                        let option_value = option_value.clone();
                        move || value.get() == option_value
                    };
                    view! {
                        <option value=option_value selected=selected>
                            {option_label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
