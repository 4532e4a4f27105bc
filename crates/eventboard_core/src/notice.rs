//! Transient user-facing notifications (rendered as a closable toast).

use crate::error::{ErrorKind, GatewayError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub status: NoticeStatus,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: NoticeStatus::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: NoticeStatus::Error,
        }
    }

    /// Error notice for a failed gateway call. A rejected request asks the user to retry;
    /// an unreachable gateway gets the generic message.
    pub fn from_gateway_error(action: &str, err: &GatewayError) -> Self {
        let description = match err.kind() {
            ErrorKind::HttpFailure => format!("Failed to {}. Please try again.", action),
            ErrorKind::NetworkFailure => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        };
        Self::error("Error", description)
    }

    pub fn is_error(&self) -> bool {
        self.status == NoticeStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_failure_asks_to_retry_the_action() {
        let err = GatewayError::Http {
            operation: "updateEvent",
            status: 500,
            body: String::new(),
        };
        let notice = Notice::from_gateway_error("edit event", &err);
        assert!(notice.is_error());
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, "Failed to edit event. Please try again.");
    }

    #[test]
    fn success_notice_is_not_an_error() {
        let notice = Notice::success("Event Edited", "The event was successfully edited.");
        assert!(!notice.is_error());
        assert_eq!(notice.status, NoticeStatus::Success);
    }
}
