//! Event detail page: one event joined with categories and users, plus the edit
//! and delete sub-flows.
//!
//! Edit: `Viewing -> Editing { draft }`; saving hands out the PUT payload, success
//! replaces the displayed event with the one the gateway returned, failure keeps the
//! draft open. The modal cannot be closed while a save is in flight.
//! Delete: `Idle -> Confirming -> Deleting`; no request id is handed out before the
//! user confirms. Edit and delete never overlap.

use super::LoadPhase;
use crate::denormalize::{denormalize, EventView};
use crate::error::GatewayError;
use crate::filter::CategorySelection;
use crate::ids::{CategoryId, EventId, UserId};
use crate::models::{Category, Event, EventPayload, User};
use crate::notice::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventField {
    Title,
    Description,
    Image,
    StartTime,
    EndTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditFlow {
    Viewing,
    Editing { draft: EventPayload, saving: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteFlow {
    Idle,
    Confirming,
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDetailState {
    event_id: EventId,
    phase: LoadPhase,
    event: Option<Event>,
    categories: Vec<Category>,
    users: Vec<User>,
    edit: EditFlow,
    delete: DeleteFlow,
}

impl EventDetailState {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            phase: LoadPhase::Loading,
            event: None,
            categories: Vec::new(),
            users: Vec::new(),
            edit: EditFlow::Viewing,
            delete: DeleteFlow::Idle,
        }
    }

    pub fn loaded(&mut self, event: Event, categories: Vec<Category>, users: Vec<User>) {
        tracing::info!(id = %event.id, "event detail loaded");
        self.event = Some(event);
        self.categories = categories;
        self.users = users;
        self.phase = LoadPhase::Ready;
    }

    pub fn failed(&mut self, err: &GatewayError) {
        self.phase = LoadPhase::Failed(err.to_string());
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn view(&self) -> Option<EventView> {
        self.event
            .as_ref()
            .map(|e| denormalize(e, &self.categories, &self.users))
    }

    // --- Edit ---

    pub fn edit(&self) -> &EditFlow {
        &self.edit
    }

    pub fn draft(&self) -> Option<&EventPayload> {
        match &self.edit {
            EditFlow::Editing { draft, .. } => Some(draft),
            EditFlow::Viewing => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.edit, EditFlow::Editing { saving: true, .. })
    }

    /// Open the edit modal with a draft copied from the displayed event.
    pub fn begin_edit(&mut self) {
        if self.delete != DeleteFlow::Idle {
            return;
        }
        if let Some(event) = &self.event {
            self.edit = EditFlow::Editing {
                draft: event.payload(),
                saving: false,
            };
        }
    }

    /// Close the modal and drop the draft. Ignored while a save is in flight.
    pub fn cancel_edit(&mut self) {
        if !self.is_saving() {
            self.edit = EditFlow::Viewing;
        }
    }

    fn draft_mut(&mut self) -> Option<&mut EventPayload> {
        match &mut self.edit {
            EditFlow::Editing { draft, .. } => Some(draft),
            EditFlow::Viewing => None,
        }
    }

    pub fn edit_field(&mut self, field: EventField, value: String) {
        if let Some(draft) = self.draft_mut() {
            let slot = match field {
                EventField::Title => &mut draft.title,
                EventField::Description => &mut draft.description,
                EventField::Image => &mut draft.image,
                EventField::StartTime => &mut draft.start_time,
                EventField::EndTime => &mut draft.end_time,
            };
            *slot = value;
        }
    }

    pub fn set_draft_category(&mut self, id: CategoryId, checked: bool) {
        if let Some(draft) = self.draft_mut() {
            let mut selection = CategorySelection::from_ids(draft.category_ids.iter().copied());
            selection.set(id, checked);
            draft.category_ids = selection.to_vec();
        }
    }

    pub fn set_draft_creator(&mut self, creator: Option<UserId>) {
        if let Some(draft) = self.draft_mut() {
            draft.created_by = creator;
        }
    }

    /// Mark the draft as saving and return what to PUT. `None` when not editing or
    /// a save is already in flight.
    pub fn begin_save(&mut self) -> Option<(EventId, EventPayload)> {
        let id = self.event_id;
        match &mut self.edit {
            EditFlow::Editing { draft, saving } if !*saving => {
                *saving = true;
                Some((id, draft.clone()))
            }
            _ => None,
        }
    }

    /// PUT succeeded: the gateway's copy becomes the displayed event, id unchanged.
    pub fn edit_succeeded(&mut self, updated: Event) -> Notice {
        self.edit = EditFlow::Viewing;
        self.event = Some(Event {
            id: self.event_id,
            ..updated
        });
        Notice::success("Event Edited", "The event was successfully edited.")
    }

    /// PUT failed: stay in the modal with the draft as typed.
    pub fn edit_failed(&mut self, err: &GatewayError) -> Notice {
        if let EditFlow::Editing { saving, .. } = &mut self.edit {
            *saving = false;
        }
        Notice::from_gateway_error("edit event", err)
    }

    // --- Delete ---

    pub fn delete(&self) -> DeleteFlow {
        self.delete
    }

    pub fn request_delete(&mut self) {
        if self.delete == DeleteFlow::Idle && self.event.is_some() && !self.is_saving() {
            self.delete = DeleteFlow::Confirming;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.delete == DeleteFlow::Confirming {
            self.delete = DeleteFlow::Idle;
        }
    }

    /// User acknowledged the confirmation: returns the id to delete.
    pub fn confirm_delete(&mut self) -> Option<EventId> {
        if self.delete != DeleteFlow::Confirming {
            return None;
        }
        self.delete = DeleteFlow::Deleting;
        Some(self.event_id)
    }

    pub fn delete_failed(&mut self, err: &GatewayError) -> Notice {
        self.delete = DeleteFlow::Idle;
        Notice::from_gateway_error("delete event", err)
    }
}
