//! Person Row Component
//!
//! A single record in the list.

use leptos::prelude::*;
use phonebook_core::{Person, PersonId};

#[component]
pub fn PersonRow(
    person: Person,
    on_delete: Callback<PersonId>,
) -> impl IntoView {
    let Person { id, name, number } = person;

    view! {
        <li class="person-row">
            <span class="person-name">{name}</span>
            " "
            <span class="person-number">{number}</span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id.clone())>
                "delete"
            </button>
        </li>
    }
}
