//! Join category ids and the creator id on an event into display-ready names and images.
//! Pure and total: ids that do not resolve get a fallback label.

use crate::ids::{CategoryId, UserId};
use crate::models::{Category, Event, User};

pub const UNKNOWN_CATEGORY: &str = "Unknown Category";
pub const UNKNOWN_USER: &str = "Unknown";
/// Label for an event without categories.
pub const NO_CATEGORIES: &str = "None";
pub const CATEGORY_SEPARATOR: &str = ", ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventView {
    /// One name per entry in `Event::category_ids`, same order.
    pub category_names: Vec<String>,
    pub creator_name: String,
    /// Empty when the creator does not resolve.
    pub creator_image: String,
}

impl EventView {
    pub fn category_label(&self) -> String {
        if self.category_names.is_empty() {
            NO_CATEGORIES.to_string()
        } else {
            self.category_names.join(CATEGORY_SEPARATOR)
        }
    }
}

pub fn category_name(id: CategoryId, categories: &[Category]) -> &str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

pub fn find_user(id: Option<UserId>, users: &[User]) -> Option<&User> {
    let id = id?;
    users.iter().find(|u| u.id == id)
}

pub fn denormalize(event: &Event, categories: &[Category], users: &[User]) -> EventView {
    let category_names = event
        .category_ids
        .iter()
        .map(|id| category_name(*id, categories).to_string())
        .collect();
    let (creator_name, creator_image) = match find_user(event.created_by, users) {
        Some(user) => (user.name.clone(), user.image.clone()),
        None => (UNKNOWN_USER.to_string(), String::new()),
    };
    EventView {
        category_names,
        creator_name,
        creator_image,
    }
}
