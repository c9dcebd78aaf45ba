//! Backend Configuration
//!
//! Where the REST backend lives. A WASM bundle has no process environment,
//! so the override is read at build time.

/// Backend address used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: &'static str,
}

impl ApiConfig {
    pub fn new(base_url: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }

    /// Join a resource path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
