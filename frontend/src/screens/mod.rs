mod add_event;
mod event;
mod events;

pub use add_event::AddEventForm;
pub use event::EventScreen;
pub use events::EventsScreen;
