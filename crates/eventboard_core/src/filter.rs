//! Visible subset of the event list: free-text search over title and description,
//! intersected with the set of checked categories.

use crate::ids::CategoryId;
use crate::models::Event;
use std::collections::BTreeSet;

/// Checked categories. Empty means "no category filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection(BTreeSet<CategoryId>);

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Flip one checkbox. Applying it twice restores the previous selection.
    pub fn toggle(&mut self, id: CategoryId) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    /// Set one checkbox to an explicit state (checkbox change events carry it).
    pub fn set(&mut self, id: CategoryId, checked: bool) {
        if checked {
            self.0.insert(id);
        } else {
            self.0.remove(&id);
        }
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.0.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<CategoryId> {
        self.iter().collect()
    }

    pub fn intersects(&self, ids: &[CategoryId]) -> bool {
        ids.iter().any(|id| self.0.contains(id))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    search_term: String,
    pub selected: CategorySelection,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search term as typed; matching is case-insensitive.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.selected.toggle(id);
    }

    pub fn matches(&self, event: &Event) -> bool {
        let needle = self.search_term.to_lowercase();
        let text_matches = needle.is_empty()
            || event.title.to_lowercase().contains(&needle)
            || event.description.to_lowercase().contains(&needle);
        let category_matches =
            self.selected.is_empty() || self.selected.intersects(&event.category_ids);
        text_matches && category_matches
    }

    /// Matching events in input order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EventId;

    fn event(id: u64, title: &str, description: &str, categories: &[u64]) -> Event {
        Event {
            id: EventId(id),
            title: title.into(),
            description: description.into(),
            image: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            category_ids: categories.iter().copied().map(CategoryId).collect(),
            created_by: None,
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, "Volleyball", "Beach volleyball game", &[1]),
            event(2, "Board games", "Settlers of Catan evening", &[2, 3]),
            event(3, "Yoga", "Relaxing SUNSET session", &[3]),
            event(4, "", "", &[]),
        ]
    }

    fn ids(events: Vec<&Event>) -> Vec<u64> {
        events.into_iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn empty_filter_shows_everything_in_order() {
        assert_eq!(ids(EventFilter::new().apply(&sample())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let events = sample();
        let mut filter = EventFilter::new();
        filter.set_search("SUNset");
        assert_eq!(ids(filter.apply(&events)), vec![3]);
        filter.set_search("game");
        assert_eq!(ids(filter.apply(&events)), vec![1, 2]);
        filter.set_search("nothing like this");
        assert!(filter.apply(&events).is_empty());
    }

    #[test]
    fn category_selection_requires_intersection() {
        let events = sample();
        let mut filter = EventFilter::new();
        filter.toggle_category(CategoryId(3));
        assert_eq!(ids(filter.apply(&events)), vec![2, 3]);
        filter.toggle_category(CategoryId(1));
        assert_eq!(ids(filter.apply(&events)), vec![1, 2, 3]);
    }

    #[test]
    fn search_and_categories_combine() {
        let events = sample();
        let mut filter = EventFilter::new();
        filter.set_search("game");
        filter.toggle_category(CategoryId(2));
        assert_eq!(ids(filter.apply(&events)), vec![2]);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selection = CategorySelection::from_ids([CategoryId(2)]);
        let before = selection.clone();
        selection.toggle(CategoryId(5));
        assert!(selection.contains(CategoryId(5)));
        selection.toggle(CategoryId(5));
        assert_eq!(selection, before);
        selection.toggle(CategoryId(2));
        selection.toggle(CategoryId(2));
        assert_eq!(selection, before);
    }

    #[test]
    fn set_is_idempotent() {
        let mut selection = CategorySelection::new();
        selection.set(CategoryId(1), true);
        selection.set(CategoryId(1), true);
        assert_eq!(selection.to_vec(), vec![CategoryId(1)]);
        selection.set(CategoryId(1), false);
        assert!(selection.is_empty());
    }
}
