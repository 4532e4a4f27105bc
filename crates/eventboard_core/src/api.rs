//! HTTP client for the events gateway (events, categories, users).
//! Every operation is one request with a JSON body; failures come back as
//! `GatewayError` tagged with the operation name.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::ids::EventId;
use crate::models::{Category, Event, EventPayload, NewUser, User};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct Gateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &GatewayConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default http client");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &GatewayConfig) -> reqwest::Client {
    reqwest::Client::new()
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// GET /events
    pub async fn list_events(&self) -> Result<Vec<Event>, GatewayError> {
        let url = self.config.url("/events");
        self.fetch_json("listEvents", self.client.get(&url)).await
    }

    /// GET /events/{id}
    pub async fn get_event(&self, id: EventId) -> Result<Event, GatewayError> {
        let url = self.config.url(&format!("/events/{}", id));
        self.fetch_json("getEvent", self.client.get(&url)).await
    }

    /// GET /categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        let url = self.config.url("/categories");
        self.fetch_json("listCategories", self.client.get(&url)).await
    }

    /// GET /users
    pub async fn list_users(&self) -> Result<Vec<User>, GatewayError> {
        let url = self.config.url("/users");
        self.fetch_json("listUsers", self.client.get(&url)).await
    }

    /// POST /events -> created event with its assigned id
    pub async fn create_event(&self, payload: &EventPayload) -> Result<Event, GatewayError> {
        let url = self.config.url("/events");
        self.fetch_json("createEvent", self.client.post(&url).json(payload))
            .await
    }

    /// POST /users -> created user with its assigned id
    pub async fn create_user(&self, payload: &NewUser) -> Result<User, GatewayError> {
        let url = self.config.url("/users");
        self.fetch_json("createUser", self.client.post(&url).json(payload))
            .await
    }

    /// PUT /events/{id} (full replacement; the id stays the same)
    pub async fn update_event(
        &self,
        id: EventId,
        payload: &EventPayload,
    ) -> Result<Event, GatewayError> {
        let url = self.config.url(&format!("/events/{}", id));
        self.fetch_json("updateEvent", self.client.put(&url).json(payload))
            .await
    }

    /// DELETE /events/{id}
    pub async fn delete_event(&self, id: EventId) -> Result<(), GatewayError> {
        let url = self.config.url(&format!("/events/{}", id));
        self.send("deleteEvent", self.client.delete(&url)).await?;
        Ok(())
    }

    /// Events and categories for the list page, fetched concurrently.
    pub async fn load_list_page(&self) -> Result<(Vec<Event>, Vec<Category>), GatewayError> {
        futures::try_join!(self.list_events(), self.list_categories())
    }

    /// One event plus the full category and user collections, fetched concurrently.
    pub async fn load_detail_page(
        &self,
        id: EventId,
    ) -> Result<(Event, Vec<Category>, Vec<User>), GatewayError> {
        futures::try_join!(self.get_event(id), self.list_categories(), self.list_users())
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let text = self.send(operation, request).await?;
        serde_json::from_str(&text).map_err(|source| {
            tracing::error!(operation, error = %source, "gateway returned malformed json");
            GatewayError::Decode { operation, source }
        })
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<String, GatewayError> {
        tracing::debug!(operation, "gateway request");
        let resp = request.send().await.map_err(|source| {
            tracing::error!(operation, error = %source, "gateway unreachable");
            GatewayError::Network { operation, source }
        })?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|source| GatewayError::Network { operation, source })?;
        if !status.is_success() {
            tracing::error!(operation, status = status.as_u16(), body = %text, "gateway rejected request");
            return Err(GatewayError::Http {
                operation,
                status: status.as_u16(),
                body: text,
            });
        }
        tracing::debug!(operation, status = status.as_u16(), "gateway response");
        Ok(text)
    }
}
