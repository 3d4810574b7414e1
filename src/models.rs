//! Frontend Models
//!
//! Data structures matching the media API entities.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Opaque item identifier assigned by the backend.
///
/// The API has been seen sending both numeric and string ids, so both decode
/// into the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MediaId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Media type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Book,
    /// Any tag this client does not know about
    #[serde(other)]
    Unknown,
}

impl MediaType {
    /// Wire value sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Book => "book",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Book => "Book",
            Self::Unknown => "Other",
        }
    }

    /// Verb used in "Plan to ..." labels
    fn verb(&self) -> &'static str {
        match self {
            Self::Book => "read",
            _ => "watch",
        }
    }
}

/// Consumption status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    #[default]
    Plan,
    Watched,
    Read,
    #[serde(other)]
    Unknown,
}

impl MediaStatus {
    /// Parses a wire value; unrecognized text becomes `Unknown`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "plan" => Self::Plan,
            "watched" => Self::Watched,
            "read" => Self::Read,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Watched => "watched",
            Self::Read => "read",
            Self::Unknown => "unknown",
        }
    }

    /// Display text, e.g. "Plan to watch" or "Read"
    pub fn label(&self, media_type: MediaType) -> String {
        match self {
            Self::Plan => format!("Plan to {}", media_type.verb()),
            Self::Watched => "Watched".to_string(),
            Self::Read => "Read".to_string(),
            Self::Unknown => "Unknown".to_string(),
        }
    }

    /// Badge class for cards and the detail page
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Watched | Self::Read => "status-badge done",
            Self::Plan => "status-badge planned",
            Self::Unknown => "status-badge",
        }
    }
}

/// One tracked movie or book (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub status: MediaStatus,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MediaItem {
    /// Cover URL, or the placeholder when the backend has none
    pub fn cover_src(&self, placeholder: &str) -> String {
        match self.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => placeholder.to_string(),
        }
    }

    /// Review text when it carries anything besides whitespace
    pub fn review_text(&self) -> Option<&str> {
        self.review.as_deref().filter(|r| !r.trim().is_empty())
    }

    /// Creation timestamp as a calendar date, e.g. "Mar 4, 2025".
    ///
    /// Unparseable timestamps are shown verbatim.
    pub fn added_on(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
        Some(match date {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => raw.to_string(),
        })
    }
}

/// A `null` title reads as empty instead of failing the whole collection
fn deserialize_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a number or numeric string; anything outside 1..=5 becomes `None`
fn deserialize_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Option::<RawRating>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawRating::Int(n)) => n,
        Some(RawRating::Float(f)) if f.fract() == 0.0 => f as i64,
        Some(RawRating::Float(_)) => return Ok(None),
        Some(RawRating::Text(s)) => match s.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => return Ok(None),
        },
    };
    Ok(u8::try_from(value).ok().filter(|r| (1..=5).contains(r)))
}

/// Five star slots, filled up to `rating`
pub fn rating_stars(rating: u8) -> [bool; 5] {
    let mut stars = [false; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = i < usize::from(rating.min(5));
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_numeric_and_string_ids() {
        let item: MediaItem = serde_json::from_str(
            r#"{"id":1,"title":"Dune","type":"movie","status":"watched","rating":5}"#,
        )
        .unwrap();
        assert_eq!(item.id, MediaId::new("1"));
        assert_eq!(item.media_type, MediaType::Movie);
        assert_eq!(item.status, MediaStatus::Watched);
        assert_eq!(item.rating, Some(5));
        assert_eq!(item.review, None);

        let item: MediaItem = serde_json::from_str(
            r#"{"id":"65f0c2","title":"Emma","type":"book","status":"plan"}"#,
        )
        .unwrap();
        assert_eq!(item.id.as_str(), "65f0c2");
    }

    #[test]
    fn unknown_tags_do_not_fail_decoding() {
        let item: MediaItem = serde_json::from_str(
            r#"{"id":3,"title":"Serial","type":"podcast","status":"listening"}"#,
        )
        .unwrap();
        assert_eq!(item.media_type, MediaType::Unknown);
        assert_eq!(item.status, MediaStatus::Unknown);
    }

    #[test]
    fn missing_title_does_not_fail_the_collection() {
        let items: Vec<MediaItem> = serde_json::from_str(
            r#"[{"id":1,"title":null,"type":"movie","status":"plan"},
                {"id":2,"type":"book","status":"plan"},
                {"id":3,"title":"Emma","type":"book","status":"read"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "");
        assert_eq!(items[1].title, "");
        assert_eq!(items[2].title, "Emma");
    }

    #[test]
    fn rating_accepts_numeric_strings_and_drops_out_of_range() {
        let decode = |raw: &str| {
            serde_json::from_str::<MediaItem>(&format!(
                r#"{{"id":1,"title":"t","type":"movie","status":"watched","rating":{raw}}}"#
            ))
            .unwrap()
            .rating
        };
        assert_eq!(decode(r#""4""#), Some(4));
        assert_eq!(decode("3.0"), Some(3));
        assert_eq!(decode("null"), None);
        assert_eq!(decode("0"), None);
        assert_eq!(decode("9"), None);
        assert_eq!(decode(r#""great""#), None);
    }

    #[test]
    fn status_labels_depend_on_type() {
        assert_eq!(MediaStatus::Plan.label(MediaType::Movie), "Plan to watch");
        assert_eq!(MediaStatus::Plan.label(MediaType::Book), "Plan to read");
        assert_eq!(MediaStatus::Watched.label(MediaType::Movie), "Watched");
        assert_eq!(MediaStatus::Read.label(MediaType::Book), "Read");
    }

    #[test]
    fn status_parse_round_trips_wire_values() {
        for status in [MediaStatus::Plan, MediaStatus::Watched, MediaStatus::Read] {
            assert_eq!(MediaStatus::parse(status.as_str()), status);
        }
        assert_eq!(MediaStatus::parse("finished"), MediaStatus::Unknown);
    }

    #[test]
    fn cover_falls_back_to_placeholder() {
        let mut item: MediaItem = serde_json::from_str(
            r#"{"id":1,"title":"t","type":"movie","status":"plan","image_url":"  "}"#,
        )
        .unwrap();
        assert_eq!(item.cover_src("/ph"), "/ph");
        item.image_url = Some("https://cdn.example.com/a.jpg".into());
        assert_eq!(item.cover_src("/ph"), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn added_on_formats_timestamps() {
        let mut item: MediaItem =
            serde_json::from_str(r#"{"id":1,"title":"t","type":"book","status":"plan"}"#).unwrap();
        assert_eq!(item.added_on(), None);

        item.created_at = Some("2025-03-04T10:20:30.000Z".into());
        assert_eq!(item.added_on().as_deref(), Some("Mar 4, 2025"));

        item.created_at = Some("2024-12-25 08:00:00".into());
        assert_eq!(item.added_on().as_deref(), Some("Dec 25, 2024"));

        item.created_at = Some("yesterday".into());
        assert_eq!(item.added_on().as_deref(), Some("yesterday"));
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(rating_stars(3), [true, true, true, false, false]);
        assert_eq!(rating_stars(0), [false; 5]);
        assert_eq!(rating_stars(7), [true; 5]);
    }
}
