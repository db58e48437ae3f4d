//! API base address resolution
//!
//! The backend listens on its own port next to the page host, under the `/api` prefix.

/// Port of the catalog backend
pub const DEFAULT_API_PORT: u16 = 4000;

/// Path prefix of every REST endpoint
pub const API_PREFIX: &str = "/api";

/// Base URL used when neither a build-time override nor a window is available
pub const FALLBACK_API_BASE: &str = "http://localhost:4000/api";

/// Resolved API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve configuration for the running page
    ///
    /// Search order:
    /// 1. `CATALOG_API_BASE` set at build time
    /// 2. Current window location with the backend port
    /// 3. `FALLBACK_API_BASE`
    pub fn from_env() -> Self {
        match option_env!("CATALOG_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(api_base()),
        }
    }

    /// Build a full URL from a path relative to the API root
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.url("/categorias/7");
    /// ```
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(FALLBACK_API_BASE)
    }
}

/// Get the base URL for API requests from the current window location
///
/// # Returns
/// - API base URL like "http://localhost:4000/api"
/// - `FALLBACK_API_BASE` if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return FALLBACK_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    base_from_location(&protocol, &hostname)
}

/// Compose `<protocol>//<hostname>:<port>/api`
pub fn base_from_location(protocol: &str, hostname: &str) -> String {
    let hostname = if hostname.is_empty() {
        "localhost"
    } else {
        hostname
    };
    format!(
        "{}//{}:{}{}",
        protocol, hostname, DEFAULT_API_PORT, API_PREFIX
    )
}
