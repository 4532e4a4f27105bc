//! Gateway location. Defaults to the local json-server address; `EVENTBOARD_API_URL`
//! overrides it (runtime env + `.env` on native, compile-time env on wasm).

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const API_URL_VAR: &str = "EVENTBOARD_API_URL";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Per-request timeout. Native only; the browser applies its own.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_override(std::env::var(API_URL_VAR).ok().as_deref())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_override(option_env!("EVENTBOARD_API_URL"))
    }

    fn from_override(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/events/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
