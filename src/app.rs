//! Phonebook Frontend App
//!
//! Root component: owns the store, loads the records once and wires the
//! form, list and dialog callbacks into the controller.

use leptos::prelude::*;
use phonebook_core::{LoadState, Person, PersonId};
use reactive_stores::Store;

use crate::components::{ConfirmDialog, FilterInput, NotificationArea, PersonForm, PersonList};
use crate::config::page_config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, page_config());

    // Provide the store to all children
    provide_context(store);

    // Load records on mount
    Effect::new(move |_| {
        let request = store.book().write().start();
        ctx.dispatch(request);
    });

    // Controlled inputs
    let name = Signal::derive(move || store.book().read().new_name().to_string());
    let number = Signal::derive(move || store.book().read().new_number().to_string());
    let filter = Signal::derive(move || store.book().read().filter().to_string());
    let on_name = Callback::new(move |value: String| store.book().write().set_new_name(value));
    let on_number = Callback::new(move |value: String| store.book().write().set_new_number(value));
    let on_filter = Callback::new(move |value: String| store.book().write().set_filter(value));

    // Actions
    let on_submit = Callback::new(move |()| {
        let request = store.book().write().submit();
        if let Some(request) = request {
            ctx.dispatch(request);
        }
    });
    let on_delete = Callback::new(move |id: PersonId| {
        store.book().write().request_delete(&id);
    });
    let on_confirm = Callback::new(move |()| {
        let request = store.book().write().confirm();
        if let Some(request) = request {
            ctx.dispatch(request);
        }
    });
    let on_cancel = Callback::new(move |()| store.book().write().cancel());

    // Derived views
    let visible = Signal::derive(move || {
        store.book().read().visible().into_iter().cloned().collect::<Vec<Person>>()
    });
    let prompt = Signal::derive(move || store.book().read().pending().map(|pending| pending.prompt()));
    let load_state = move || store.book().read().load_state();

    view! {
        <div class="phonebook">
            <h2>"Phonebook"</h2>
            <NotificationArea />
            <FilterInput value=filter on_change=on_filter />

            <h2>"Add a new"</h2>
            <PersonForm
                name=name
                number=number
                on_name=on_name
                on_number=on_number
                on_submit=on_submit
            />

            <h2>"Numbers"</h2>
            {move || (load_state() == LoadState::Loading).then(|| view! { <p class="loading">"Loading..."</p> })}
            <PersonList persons=visible on_delete=on_delete />

            <p class="person-count">
                {move || format!("{} shown of {}", visible.get().len(), store.book().read().persons().len())}
                {move || match store.in_flight().get() {
                    0 => String::new(),
                    n => format!(", {} pending", n),
                }}
            </p>

            <ConfirmDialog prompt=prompt on_confirm=on_confirm on_cancel=on_cancel />
        </div>
    }
}
