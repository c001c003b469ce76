//! Person Form Component
//!
//! Name and number inputs with an add button.

use leptos::prelude::*;

/// Form for adding a person or replacing an existing person's number
#[component]
pub fn PersonForm(
    name: Signal<String>,
    number: Signal<String>,
    on_name: Callback<String>,
    on_number: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="person-form" on:submit=submit>
            <div>
                "name: "
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| on_name.run(event_target_value(&ev))
                />
            </div>
            <div>
                "number: "
                <input
                    type="tel"
                    prop:value=move || number.get()
                    on:input=move |ev| on_number.run(event_target_value(&ev))
                />
            </div>
            <div>
                <button type="submit">"add"</button>
            </div>
        </form>
    }
}
