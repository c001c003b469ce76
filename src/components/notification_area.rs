//! Notification Area Component
//!
//! Shows every active notification, oldest first.

use leptos::prelude::*;
use phonebook_core::Notification;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationArea() -> impl IntoView {
    let store = use_app_store();
    let active = move || {
        store
            .book()
            .read()
            .notifications()
            .iter()
            .cloned()
            .collect::<Vec<Notification>>()
    };

    view! {
        <div class="notifications">
            <For
                each=active
                key=|notification| notification.id
                children=|notification| view! {
                    <div class=notification.kind.as_class()>{notification.message}</div>
                }
            />
        </div>
    }
}
