//! Application Context
//!
//! Handles shared by the root component's callbacks: the state store and
//! the client config, plus the glue that runs requests and expires
//! notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phonebook_core::{execute, ClientConfig, NotificationId, Request, RestPersonService};

use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Application state
    pub store: AppStore,
    /// Record store location and notification lifetime
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ClientConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    fn service(&self) -> RestPersonService {
        self.config.with_value(RestPersonService::new)
    }

    /// Send a request and merge its completion into the store when it arrives.
    ///
    /// Requests are not coordinated: completions are applied in arrival order.
    pub fn dispatch(&self, request: Request) {
        let ctx = *self;
        let service = self.service();
        *self.store.in_flight().write() += 1;

        spawn_local(async move {
            let completion = execute(&service, request).await;
            *ctx.store.in_flight().write() -= 1;
            let raised = ctx.store.book().write().complete(completion);
            if let Some(id) = raised {
                ctx.expire_later(id);
            }
        });
    }

    /// Dismiss a notification once its lifetime has passed
    pub fn expire_later(&self, id: NotificationId) {
        let store = self.store;
        let ttl = self.config.with_value(|config| config.notification_ttl());
        let ttl = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);

        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store.book().write().dismiss(id);
        });
    }
}
