//! Filter Input Component

use leptos::prelude::*;

/// Controlled text input reporting every keystroke
#[component]
pub fn FilterInput(
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-row">
            "filter shown with: "
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
