mod card;
mod category_checklist;
mod event_card;
mod modal;
mod navigation;
mod page_background;
mod toast;

pub use card::Card;
pub use category_checklist::CategoryChecklist;
pub use event_card::EventCard;
pub use modal::Modal;
pub use navigation::Navigation;
pub use page_background::PageBackground;
pub use toast::Toast;
