//! Wire models for events, categories and users.
//! JSON uses camelCase names; missing or null text fields read as empty strings so a
//! sparse record from the gateway never fails the whole collection.

use crate::ids::{CategoryId, EventId, UserId};
use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub created_by: Option<UserId>,
}

/// Event body for `POST /events` and `PUT /events/{id}`: everything but the id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub start_time: String,
    pub end_time: String,
    pub category_ids: Vec<CategoryId>,
    pub created_by: Option<UserId>,
}

impl Event {
    pub fn from_payload(id: EventId, payload: EventPayload) -> Self {
        Event {
            id,
            title: payload.title,
            description: payload.description,
            image: payload.image,
            start_time: payload.start_time,
            end_time: payload.end_time,
            category_ids: payload.category_ids,
            created_by: payload.created_by,
        }
    }

    pub fn payload(&self) -> EventPayload {
        EventPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            category_ids: self.category_ids.clone(),
            created_by: self.created_by,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Profile photo URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Body for `POST /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub image: String,
}
