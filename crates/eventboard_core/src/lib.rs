//! EventBoard client core: remote gateway, event/category/user join, list filtering
//! and the page-scoped state machines the UI drives. No UI dependency, so everything
//! here is testable on native.

pub mod api;
pub mod config;
pub mod datetime;
pub mod denormalize;
pub mod error;
pub mod filter;
pub mod ids;
pub mod models;
pub mod notice;
pub mod pages;

pub use api::Gateway;
pub use config::GatewayConfig;
pub use denormalize::{denormalize, EventView};
pub use error::{ErrorKind, GatewayError};
pub use filter::{CategorySelection, EventFilter};
pub use ids::{CategoryId, EventId, UserId};
pub use models::{Category, Event, EventPayload, NewUser, User};
pub use notice::{Notice, NoticeStatus};
