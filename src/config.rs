//! API endpoint configuration
//!
//! Values are fixed at compile time through environment variables so the
//! static bundle needs no runtime config file.

use crate::error::{ApiError, Result};
use crate::models::MediaId;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const DEFAULT_API_URL: &str = "https://albackend-production.up.railway.app";
const DEFAULT_COLLECTION_PATH: &str = "/api";
const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Placeholder cover used by list cards
pub const CARD_PLACEHOLDER: &str = "/api/placeholder/400/320";
/// Placeholder cover used by the detail page
pub const DETAIL_PLACEHOLDER: &str = "/api/placeholder/400/600";

/// Characters escaped in an id path segment
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the media API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    collection_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, collection_path: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            collection_path: normalize_collection_path(collection_path)?,
        })
    }

    /// Reads `MEDIA_TRACKER_API_URL` / `MEDIA_TRACKER_COLLECTION_PATH` as set
    /// at build time.
    pub fn from_build_env() -> Result<Self> {
        Self::new(
            option_env!("MEDIA_TRACKER_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("MEDIA_TRACKER_COLLECTION_PATH").unwrap_or(DEFAULT_COLLECTION_PATH),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}{path}`, used by list and create
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.collection_path)
    }

    /// `{base}{path}/{id}`, used to fetch and delete one item
    pub fn item_url(&self, id: &MediaId) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }
}

/// `tracing` filter directive baked in at build time
pub fn log_directive() -> &'static str {
    option_env!("MEDIA_TRACKER_LOG").unwrap_or(DEFAULT_LOG_DIRECTIVE)
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(ApiError::InvalidInput("API base URL must not be empty".to_string()));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(ApiError::InvalidInput(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

fn normalize_collection_path(raw: &str) -> Result<String> {
    let path = raw.trim().trim_matches('/');
    if path.is_empty() {
        return Err(ApiError::InvalidInput("Collection path must not be empty".to_string()));
    }
    Ok(format!("/{path}"))
}
