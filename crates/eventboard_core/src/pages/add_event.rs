//! Add-event form: the draft the inputs edit, and the submit sequence
//! (optional creator user first, then the event).

use crate::api::Gateway;
use crate::datetime::parse_timestamp;
use crate::error::GatewayError;
use crate::filter::CategorySelection;
use crate::ids::{CategoryId, UserId};
use crate::models::{Event, EventPayload, NewUser};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Start time is required")]
    MissingStartTime,
    #[error("End time is required")]
    MissingEndTime,
    #[error("End time must not be before the start time")]
    EndBeforeStart,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    /// The creator could not be created; no event request was sent.
    #[error("Could not create the event creator: {0}")]
    CreateUser(#[source] GatewayError),
    /// `creator` is the user made earlier in the same attempt, if any.
    #[error("Could not create the event: {source}")]
    CreateEvent {
        #[source]
        source: GatewayError,
        creator: Option<(NewUser, UserId)>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddEventDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub start_time: String,
    pub end_time: String,
    pub categories: CategorySelection,
    /// When non-blank, a user with this name is created and set as `createdBy`.
    pub creator_name: String,
    pub creator_image: String,
    /// Creator already stored by an attempt whose event request failed; reused while
    /// the name and photo are unchanged.
    pub saved_creator: Option<(NewUser, UserId)>,
}

impl AddEventDraft {
    pub fn toggle_category(&mut self, id: CategoryId) {
        self.categories.toggle(id);
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.start_time.trim().is_empty() {
            return Err(DraftError::MissingStartTime);
        }
        if self.end_time.trim().is_empty() {
            return Err(DraftError::MissingEndTime);
        }
        if let (Some(start), Some(end)) =
            (parse_timestamp(&self.start_time), parse_timestamp(&self.end_time))
        {
            if end < start {
                return Err(DraftError::EndBeforeStart);
            }
        }
        Ok(())
    }

    pub fn new_user(&self) -> Option<NewUser> {
        let name = self.creator_name.trim();
        (!name.is_empty()).then(|| NewUser {
            name: name.to_string(),
            image: self.creator_image.trim().to_string(),
        })
    }

    /// Id of an already created user matching the current creator fields.
    pub fn reusable_creator(&self, wanted: &NewUser) -> Option<UserId> {
        match &self.saved_creator {
            Some((saved, id)) if saved == wanted => Some(*id),
            _ => None,
        }
    }

    /// Keep the creator from a failed submit so the retry does not create it again.
    pub fn remember_creator(&mut self, err: &SubmitError) {
        if let SubmitError::CreateEvent {
            creator: Some(creator),
            ..
        } = err
        {
            self.saved_creator = Some(creator.clone());
        }
    }

    pub fn payload(&self, created_by: Option<UserId>) -> EventPayload {
        EventPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            category_ids: self.categories.to_vec(),
            created_by,
        }
    }

    /// Back to an empty form after a successful submit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validate, create the creator if one was named (or reuse the one a failed attempt
/// left behind), then create the event.
pub async fn submit(gateway: &Gateway, draft: &AddEventDraft) -> Result<Event, SubmitError> {
    draft.validate()?;
    let creator = match draft.new_user() {
        Some(new_user) => match draft.reusable_creator(&new_user) {
            Some(id) => {
                tracing::debug!(user_id = %id, "reusing creator from previous attempt");
                Some((new_user, id))
            }
            None => {
                let user = gateway
                    .create_user(&new_user)
                    .await
                    .map_err(SubmitError::CreateUser)?;
                tracing::info!(user_id = %user.id, "creator created");
                Some((new_user, user.id))
            }
        },
        None => None,
    };
    let created_by = creator.as_ref().map(|(_, id)| *id);
    let event = gateway
        .create_event(&draft.payload(created_by))
        .await
        .map_err(|source| SubmitError::CreateEvent { source, creator })?;
    tracing::info!(id = %event.id, "event created");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> AddEventDraft {
        let mut draft = AddEventDraft {
            title: " A ".into(),
            description: "B".into(),
            image: "http://x/y.png".into(),
            start_time: "2024-01-01T10:00".into(),
            end_time: "2024-01-01T12:00".into(),
            ..Default::default()
        };
        draft.toggle_category(CategoryId(3));
        draft.toggle_category(CategoryId(1));
        draft
    }

    #[test]
    fn payload_trims_and_sorts_categories() {
        let payload = filled().payload(Some(UserId(5)));
        assert_eq!(
            payload,
            EventPayload {
                title: "A".into(),
                description: "B".into(),
                image: "http://x/y.png".into(),
                start_time: "2024-01-01T10:00".into(),
                end_time: "2024-01-01T12:00".into(),
                category_ids: vec![CategoryId(1), CategoryId(3)],
                created_by: Some(UserId(5)),
            }
        );
    }

    #[test]
    fn validation_rejects_missing_fields_and_reversed_times() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(AddEventDraft::default().validate(), Err(DraftError::MissingTitle));

        let mut draft = filled();
        draft.end_time = " ".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingEndTime));

        draft.end_time = "2024-01-01T09:00".into();
        assert_eq!(draft.validate(), Err(DraftError::EndBeforeStart));

        draft.end_time = "whenever".into();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn creator_only_when_named() {
        let mut draft = filled();
        assert_eq!(draft.new_user(), None);
        draft.creator_name = "  Sam ".into();
        draft.creator_image = "http://x/sam.png".into();
        assert_eq!(
            draft.new_user(),
            Some(NewUser { name: "Sam".into(), image: "http://x/sam.png".into() })
        );
    }

    #[test]
    fn clear_empties_every_field() {
        let mut draft = filled();
        draft.creator_name = "Sam".into();
        draft.clear();
        assert_eq!(draft, AddEventDraft::default());
        assert!(draft.categories.is_empty());
    }

    #[test]
    fn remembered_creator_is_reused_only_while_unchanged() {
        let mut draft = filled();
        draft.creator_name = "Sam".into();
        let sam = draft.new_user().unwrap();
        draft.remember_creator(&SubmitError::CreateEvent {
            source: GatewayError::Http {
                operation: "createEvent",
                status: 500,
                body: String::new(),
            },
            creator: Some((sam.clone(), UserId(7))),
        });
        assert_eq!(draft.reusable_creator(&sam), Some(UserId(7)));

        draft.creator_name = "Samantha".into();
        assert_eq!(draft.reusable_creator(&draft.new_user().unwrap()), None);

        draft.clear();
        assert_eq!(draft.saved_creator, None);
    }
}
