//! Client-side route paths

use percent_encoding::utf8_percent_encode;

use crate::config::PATH_SEGMENT;
use crate::models::MediaId;

/// Collection list (default route)
pub const LIST: &str = "/";
/// Create form
pub const CREATE: &str = "/add";

/// Detail page for one item
pub fn detail(id: &MediaId) -> String {
    format!("/media/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}
