//! Phonebook Core
//!
//! Layered architecture:
//! - domain: records and service errors
//! - service: the remote record store (REST and in-memory)
//! - phonebook: root controller state and its transitions
//! - dispatch: runs controller requests against a service

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod filter;
pub mod notification;
pub mod phonebook;
pub mod service;

pub use config::ClientConfig;
pub use dispatch::{execute, Completion, Request};
pub use domain::{NewPerson, Person, PersonId, ServiceError, ServiceResult};
pub use notification::{Notification, NotificationId, NotificationKind, NotificationQueue};
pub use phonebook::{LoadState, PendingAction, Phonebook};
pub use service::{InMemoryPersonService, PersonService, RestPersonService};
