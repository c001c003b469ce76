//! Domain Layer
//!
//! Phonebook records and the errors the record store can report.
//! Only serde is needed here, for the JSON wire format.

mod error;
mod person;

pub use error::{ServiceError, ServiceResult};
pub use person::{NewPerson, Person, PersonId};
