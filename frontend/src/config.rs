//! Frontend settings.

use common::selection::MAX_COMPARE;

pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:8090";
pub const DEFAULT_COMPARE_PATH: &str = "/compare";
pub const DEFAULT_SELECTION_STORE_KEY: &str = "compare_selection";

#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub catalog_api_url: String,
    /// Page the shareable comparison link points at.
    pub compare_path: String,
    pub selection_store_key: String,
    pub max_compare: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            catalog_api_url: DEFAULT_CATALOG_API_URL.to_string(),
            compare_path: DEFAULT_COMPARE_PATH.to_string(),
            selection_store_key: DEFAULT_SELECTION_STORE_KEY.to_string(),
            max_compare: MAX_COMPARE,
        }
    }
}

impl FrontendConfig {
    pub fn from_env() -> Self {
        let catalog_api_url = std::env::var("CATALOG_API_URL")
            .ok()
            .or_else(|| option_env!("CATALOG_API_URL").map(str::to_string))
            .unwrap_or_else(|| {
                tracing::info!("CATALOG_API_URL not set, using default: {}", DEFAULT_CATALOG_API_URL);
                DEFAULT_CATALOG_API_URL.to_string()
            });
        Self { catalog_api_url, ..Self::default() }
    }
}
