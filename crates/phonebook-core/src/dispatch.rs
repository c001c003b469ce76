//! Request Dispatch
//!
//! The controller never talks to the network itself. Its transitions emit
//! a [`Request`]; the caller runs it with [`execute`] and feeds the
//! resulting [`Completion`] back through `Phonebook::complete`.

use crate::domain::{NewPerson, Person, PersonId, ServiceResult};
use crate::service::PersonService;

/// A remote call the controller wants made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Initial load of the whole collection
    Load,
    Create(NewPerson),
    /// Replace the number of an existing record
    Update { id: PersonId, person: NewPerson },
    Delete { id: PersonId, name: String },
}

/// Outcome of a [`Request`], carrying what the controller needs to merge it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Loaded(ServiceResult<Vec<Person>>),
    Created {
        name: String,
        result: ServiceResult<Person>,
    },
    Updated {
        id: PersonId,
        name: String,
        result: ServiceResult<Person>,
    },
    Deleted {
        id: PersonId,
        name: String,
        result: ServiceResult<()>,
    },
}

/// Run one request against the service. Never retries.
pub async fn execute<S: PersonService + ?Sized>(service: &S, request: Request) -> Completion {
    match request {
        Request::Load => Completion::Loaded(service.get_all().await),
        Request::Create(person) => {
            let result = service.create(&person).await;
            Completion::Created {
                name: person.name,
                result,
            }
        }
        Request::Update { id, person } => {
            let result = service.update(&id, &person).await;
            Completion::Updated {
                id,
                name: person.name,
                result,
            }
        }
        Request::Delete { id, name } => {
            let result = service.remove(&id).await;
            Completion::Deleted { id, name, result }
        }
    }
}
