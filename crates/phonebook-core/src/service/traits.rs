//! Service Layer - Core Trait
//!
//! Abstract interface to the remote collection of persons.

use async_trait::async_trait;

use crate::domain::{NewPerson, Person, PersonId, ServiceResult};

/// CRUD operations against the person collection.
///
/// Futures are not required to be `Send`: in the browser every request
/// runs on the single UI thread.
#[async_trait(?Send)]
pub trait PersonService {
    /// Fetch the whole collection
    async fn get_all(&self) -> ServiceResult<Vec<Person>>;

    /// Create a record; the server assigns its id
    async fn create(&self, person: &NewPerson) -> ServiceResult<Person>;

    /// Replace the record with the given id
    async fn update(&self, id: &PersonId, person: &NewPerson) -> ServiceResult<Person>;

    /// Delete the record with the given id
    async fn remove(&self, id: &PersonId) -> ServiceResult<()>;
}
