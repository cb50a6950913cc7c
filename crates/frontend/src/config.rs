//! Backend connection settings.

/// Backend origin used when no override is baked in at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8090";

/// How long a request may stay in flight before it is aborted.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Connection settings for the kkomason API.
///
/// `base_url` carries no trailing slash; request paths start with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("KKOMASON_API_BASE")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
