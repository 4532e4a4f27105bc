//! Page-scoped state. Each screen owns one of these in a signal; nothing is shared
//! across pages, so navigating back re-fetches.

pub mod add_event;
pub mod detail;
pub mod list;

/// Load phase shared by the list and detail pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    /// Initial fetch failed; the message is shown in place of the content.
    Failed(String),
}
