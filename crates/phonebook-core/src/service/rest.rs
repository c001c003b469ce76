//! REST Person Service
//!
//! HTTP client for the `/persons` collection resource. Uses the browser's
//! fetch API when compiled to wasm32.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::PersonService;
use crate::config::ClientConfig;
use crate::domain::{NewPerson, Person, PersonId, ServiceError, ServiceResult};

/// Characters escaped when an id is placed in a path segment
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone)]
pub struct RestPersonService {
    client: Client,
    collection_url: String,
}

impl RestPersonService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            collection_url: config.collection_url(),
        }
    }

    /// URL of a single record
    pub fn item_url(&self, id: &PersonId) -> String {
        format!("{}/{}", self.collection_url, utf8_percent_encode(id.as_str(), ID_SEGMENT))
    }

    /// Map non-2xx responses to errors. `id` is the addressed record, if any.
    fn check(response: Response, id: Option<&PersonId>) -> ServiceResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(ServiceError::NotFound(id.clone())),
            _ => Err(ServiceError::Status(status.as_u16())),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl PersonService for RestPersonService {
    async fn get_all(&self) -> ServiceResult<Vec<Person>> {
        log::debug!("GET {}", self.collection_url);
        let response = self.client.get(&self.collection_url).send().await.map_err(transport)?;
        Self::decode(Self::check(response, None)?).await
    }

    async fn create(&self, person: &NewPerson) -> ServiceResult<Person> {
        log::debug!("POST {} name={}", self.collection_url, person.name);
        let response = self
            .client
            .post(&self.collection_url)
            .json(person)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(Self::check(response, None)?).await
    }

    async fn update(&self, id: &PersonId, person: &NewPerson) -> ServiceResult<Person> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let response = self.client.put(&url).json(person).send().await.map_err(transport)?;
        Self::decode(Self::check(response, Some(id))?).await
    }

    async fn remove(&self, id: &PersonId) -> ServiceResult<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await.map_err(transport)?;
        Self::check(response, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RestPersonService {
        RestPersonService::new(&ClientConfig::default())
    }

    #[test]
    fn test_item_url() {
        assert_eq!(service().item_url(&PersonId::new("42")), "http://localhost:3001/persons/42");
        assert_eq!(
            service().item_url(&PersonId::new("65a1-b_c")),
            "http://localhost:3001/persons/65a1-b_c"
        );
    }

    #[test]
    fn test_item_url_escapes_path_characters() {
        assert_eq!(
            service().item_url(&PersonId::new("a/b c")),
            "http://localhost:3001/persons/a%2Fb%20c"
        );
    }
}
