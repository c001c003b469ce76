//! Person List Component

use leptos::prelude::*;
use phonebook_core::{Person, PersonId};

use super::PersonRow;

/// Renders the filtered records, one row each
#[component]
pub fn PersonList(
    persons: Signal<Vec<Person>>,
    on_delete: Callback<PersonId>,
) -> impl IntoView {
    view! {
        <ul class="person-list">
            // Keyed on the whole record so an updated number re-renders its row
            <For
                each=move || persons.get()
                key=|person| person.clone()
                children=move |person| view! { <PersonRow person=person on_delete=on_delete /> }
            />
        </ul>
    }
}
