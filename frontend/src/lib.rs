//! EventBoard frontend library: screens, widgets, theme and the shared gateway handle.

pub mod app;
pub mod screens;
pub mod theme;
pub mod widgets;

use eventboard_core::{Gateway, GatewayConfig};
use once_cell::sync::Lazy;

static GATEWAY: Lazy<Gateway> = Lazy::new(|| {
    let config = GatewayConfig::from_env();
    tracing::info!(base_url = %config.base_url, "gateway configured");
    Gateway::new(config)
});

/// Process-wide HTTP gateway. Holds no page data, only the client and base URL.
pub fn gateway() -> &'static Gateway {
    &GATEWAY
}
