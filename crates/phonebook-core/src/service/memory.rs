//! In-Memory Person Service
//!
//! Process-local collection with backend-style id assignment. Supports
//! failure injection and out-of-band deletes so callers can exercise the
//! stale-record paths.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::PersonService;
use crate::domain::{NewPerson, Person, PersonId, ServiceError, ServiceResult};

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    persons: Vec<Person>,
    fail_next: Option<ServiceError>,
    requests: usize,
}

#[derive(Debug, Default)]
pub struct InMemoryPersonService {
    state: Mutex<MemoryState>,
}

impl InMemoryPersonService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection. Later ids continue after the largest numeric seed id.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        let next_id = persons
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            state: Mutex::new(MemoryState {
                next_id,
                persons,
                ..Default::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make the next request fail with `error`
    pub fn fail_next(&self, error: ServiceError) {
        self.lock().fail_next = Some(error);
    }

    /// Delete a record as another client would, without going through the service API
    pub fn forget(&self, id: &PersonId) {
        self.lock().persons.retain(|p| &p.id != id);
    }

    /// Snapshot of the server-side collection
    pub fn persons(&self) -> Vec<Person> {
        self.lock().persons.clone()
    }

    /// Number of requests received so far
    pub fn requests(&self) -> usize {
        self.lock().requests
    }

    /// Count the request and take any injected failure
    fn begin(&self) -> ServiceResult<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        state.requests += 1;
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

#[async_trait(?Send)]
impl PersonService for InMemoryPersonService {
    async fn get_all(&self) -> ServiceResult<Vec<Person>> {
        Ok(self.begin()?.persons.clone())
    }

    async fn create(&self, person: &NewPerson) -> ServiceResult<Person> {
        let mut state = self.begin()?;
        state.next_id += 1;
        let created = Person::new(state.next_id.to_string(), person.name.clone(), person.number.clone());
        state.persons.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &PersonId, person: &NewPerson) -> ServiceResult<Person> {
        let mut state = self.begin()?;
        let existing = state
            .persons
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
        existing.name = person.name.clone();
        existing.number = person.number.clone();
        Ok(existing.clone())
    }

    async fn remove(&self, id: &PersonId) -> ServiceResult<()> {
        let mut state = self.begin()?;
        let before = state.persons.len();
        state.persons.retain(|p| &p.id != id);
        if state.persons.len() == before {
            return Err(ServiceError::NotFound(id.clone()));
        }
        Ok(())
    }
}
