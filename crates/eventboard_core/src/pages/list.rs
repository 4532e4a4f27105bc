//! Event list page: fetched events and categories, search/category filter, add-event modal.
//!
//! Search and checkbox changes only recompute the visible list. A successful create
//! appends the event the gateway returned, so the card carries the server-assigned id.

use super::LoadPhase;
use crate::denormalize::{denormalize, EventView};
use crate::error::GatewayError;
use crate::filter::EventFilter;
use crate::ids::CategoryId;
use crate::models::{Category, Event};

/// A visible card: the event plus its resolved category names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedEvent {
    pub event: Event,
    pub view: EventView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventListState {
    phase: LoadPhase,
    events: Vec<Event>,
    categories: Vec<Category>,
    filter: EventFilter,
    add_modal_open: bool,
}

impl Default for EventListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            events: Vec::new(),
            categories: Vec::new(),
            filter: EventFilter::new(),
            add_modal_open: false,
        }
    }

    pub fn loaded(&mut self, events: Vec<Event>, categories: Vec<Category>) {
        tracing::info!(events = events.len(), categories = categories.len(), "event list loaded");
        self.events = events;
        self.categories = categories;
        self.phase = LoadPhase::Ready;
    }

    pub fn failed(&mut self, err: &GatewayError) {
        self.phase = LoadPhase::Failed(err.to_string());
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.set_search(term);
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.filter.toggle_category(id);
    }

    /// Follow the checkbox state rather than flipping, so a repeated event is harmless.
    pub fn set_category(&mut self, id: CategoryId, checked: bool) {
        self.filter.selected.set(id, checked);
    }

    pub fn is_selected(&self, id: CategoryId) -> bool {
        self.filter.selected.contains(id)
    }

    /// Filtered events with category names resolved, in gateway order.
    pub fn visible(&self) -> Vec<ListedEvent> {
        self.filter
            .apply(&self.events)
            .into_iter()
            .map(|event| ListedEvent {
                view: denormalize(event, &self.categories, &[]),
                event: event.clone(),
            })
            .collect()
    }

    pub fn add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }

    pub fn event_added(&mut self, event: Event) {
        tracing::info!(id = %event.id, "event added to list");
        self.events.push(event);
        self.add_modal_open = false;
    }
}
