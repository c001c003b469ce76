//! Phonebook Controller State
//!
//! Owns the record list, the form inputs, the filter text, the
//! notification queue and the pending confirmation. Transitions are
//! synchronous; anything that needs the server is returned as a
//! [`Request`] and merged back later through [`Phonebook::complete`].

use crate::dispatch::{Completion, Request};
use crate::domain::{NewPerson, Person, PersonId};
use crate::filter::filter_persons;
use crate::notification::{NotificationId, NotificationQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// An action waiting for the user to confirm or cancel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Overwrite the number of an existing record with the same name
    Replace { target: Person, number: String },
    Delete { id: PersonId, name: String },
}

impl PendingAction {
    /// Question shown in the confirmation dialog
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::Replace { target, .. } => format!(
                "{} is already added to phonebook, replace the old number with a new one?",
                target.name
            ),
            PendingAction::Delete { name, .. } => format!("Delete {} ?", name),
        }
    }
}

// ========================
// Notification Texts
// ========================

fn load_failed() -> String {
    "Failed to fetch data from the server.".to_string()
}

fn added(name: &str) -> String {
    format!("{} has been added to the phonebook", name)
}

fn add_failed(name: &str) -> String {
    format!("Failed to add {} to the phonebook", name)
}

fn updated(name: &str) -> String {
    format!("{}'s number has been updated", name)
}

fn already_removed(name: &str) -> String {
    format!("Information for {} has already been removed from the server", name)
}

fn deleted(name: &str) -> String {
    format!("{} has been deleted from the phonebook", name)
}

fn delete_failed(name: &str) -> String {
    format!("Failed to delete {}. It might have already been removed.", name)
}

// ========================
// Controller
// ========================

#[derive(Debug, Clone, Default)]
pub struct Phonebook {
    persons: Vec<Person>,
    new_name: String,
    new_number: String,
    filter: String,
    notifications: NotificationQueue,
    pending: Option<PendingAction>,
    load_state: LoadState,
}

impl Phonebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A phonebook that already holds `persons`, skipping the initial load
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons,
            load_state: LoadState::Ready,
            ..Default::default()
        }
    }

    /// Request for the one-time initial load
    pub fn start(&mut self) -> Request {
        self.load_state = LoadState::Loading;
        Request::Load
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn new_number(&self) -> &str {
        &self.new_number
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn set_new_name(&mut self, name: impl Into<String>) {
        self.new_name = name.into();
    }

    pub fn set_new_number(&mut self, number: impl Into<String>) {
        self.new_number = number.into();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Records shown in the list view
    pub fn visible(&self) -> Vec<&Person> {
        filter_persons(&self.persons, &self.filter)
    }

    /// Expire a notification
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Handle the entry form's submit.
    ///
    /// Returns a create request for a new name. An existing name opens a
    /// replace confirmation instead and returns `None`, as do empty inputs
    /// and a submit while another confirmation is open.
    pub fn submit(&mut self) -> Option<Request> {
        if self.new_name.is_empty() || self.new_number.is_empty() || self.pending.is_some() {
            return None;
        }

        match self.persons.iter().find(|p| p.name == self.new_name) {
            Some(existing) => {
                log::debug!("{} already exists as {}, asking to replace", existing.name, existing.id);
                self.pending = Some(PendingAction::Replace {
                    target: existing.clone(),
                    number: self.new_number.clone(),
                });
                None
            }
            None => Some(Request::Create(NewPerson::new(
                self.new_name.clone(),
                self.new_number.clone(),
            ))),
        }
    }

    /// Handle a list row's delete action by opening a confirmation.
    /// Returns false when the id is unknown or another confirmation is open.
    pub fn request_delete(&mut self, id: &PersonId) -> bool {
        if self.pending.is_some() {
            return false;
        }
        match self.persons.iter().find(|p| &p.id == id) {
            Some(person) => {
                self.pending = Some(PendingAction::Delete {
                    id: person.id.clone(),
                    name: person.name.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Accept the pending confirmation
    pub fn confirm(&mut self) -> Option<Request> {
        match self.pending.take()? {
            PendingAction::Replace { target, number } => Some(Request::Update {
                id: target.id,
                person: NewPerson::new(target.name, number),
            }),
            PendingAction::Delete { id, name } => Some(Request::Delete { id, name }),
        }
    }

    /// Decline the pending confirmation. Inputs are kept.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Merge a finished request into the current state.
    ///
    /// Returns the notification raised, if any, so the caller can schedule its expiry.
    pub fn complete(&mut self, completion: Completion) -> Option<NotificationId> {
        match completion {
            Completion::Loaded(Ok(persons)) => {
                log::info!("loaded {} persons", persons.len());
                self.persons = persons;
                self.load_state = LoadState::Ready;
                None
            }
            Completion::Loaded(Err(e)) => {
                log::warn!("initial load failed: {}", e);
                self.load_state = LoadState::Failed;
                Some(self.notifications.error(load_failed()))
            }
            Completion::Created { name, result: Ok(person) } => {
                self.persons.push(person);
                self.clear_inputs();
                Some(self.notifications.success(added(&name)))
            }
            Completion::Created { name, result: Err(e) } => {
                log::warn!("create {} failed: {}", name, e);
                Some(self.notifications.error(add_failed(&name)))
            }
            Completion::Updated { id, name, result: Ok(person) } => {
                if let Some(slot) = self.persons.iter_mut().find(|p| p.id == id) {
                    *slot = person;
                }
                self.clear_inputs();
                Some(self.notifications.success(updated(&name)))
            }
            Completion::Updated { id, name, result: Err(e) } => {
                if e.is_not_found() {
                    log::info!("{} was removed elsewhere, dropping it", id);
                } else {
                    log::warn!("update {} failed: {}", id, e);
                }
                self.remove_local(&id);
                Some(self.notifications.error(already_removed(&name)))
            }
            Completion::Deleted { id, name, result: Ok(()) } => {
                self.remove_local(&id);
                Some(self.notifications.success(deleted(&name)))
            }
            Completion::Deleted { id, name, result: Err(e) } => {
                log::warn!("delete {} failed: {}", id, e);
                self.remove_local(&id);
                Some(self.notifications.error(delete_failed(&name)))
            }
        }
    }

    fn clear_inputs(&mut self) {
        self.new_name.clear();
        self.new_number.clear();
    }

    fn remove_local(&mut self, id: &PersonId) {
        self.persons.retain(|p| &p.id != id);
    }
}
