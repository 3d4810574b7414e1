//! Create-Form Derivation
//!
//! Pure rules behind the "add media" form: which statuses a type allows,
//! which inputs are visible, and how a draft becomes a request payload.

use crate::error::{ApiError, Result};
use crate::models::{MediaStatus, MediaType};

/// Largest accepted cover upload
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Statuses offered for a type, plan first
pub fn allowed_statuses(media_type: MediaType) -> [MediaStatus; 2] {
    match media_type {
        MediaType::Book => [MediaStatus::Plan, MediaStatus::Read],
        _ => [MediaStatus::Plan, MediaStatus::Watched],
    }
}

/// Keeps `status` when valid for `media_type`, otherwise falls back to plan
pub fn resolve_status(media_type: MediaType, status: MediaStatus) -> MediaStatus {
    if allowed_statuses(media_type).contains(&status) {
        status
    } else {
        MediaStatus::Plan
    }
}

/// Which optional inputs the form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub rating: bool,
    pub review: bool,
}

pub fn field_visibility(status: MediaStatus) -> FieldVisibility {
    let shown = status != MediaStatus::Plan;
    FieldVisibility {
        rating: shown,
        review: shown,
    }
}

/// Form state as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaDraft {
    pub title: String,
    pub media_type: MediaType,
    pub status: MediaStatus,
    /// Raw rating input; parsed on submit
    pub rating: String,
    pub review: String,
}

impl MediaDraft {
    /// Changes type and drops a status the new type does not allow
    pub fn set_type(&mut self, media_type: MediaType) {
        self.media_type = media_type;
        self.status = resolve_status(media_type, self.status);
    }

    pub fn set_status(&mut self, status: MediaStatus) {
        self.status = resolve_status(self.media_type, status);
    }

    pub fn visibility(&self) -> FieldVisibility {
        field_visibility(self.status)
    }

    /// Validates the draft and builds the create payload
    pub fn to_payload(&self) -> Result<CreateMediaPayload> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::InvalidInput("Title is required".to_string()));
        }
        let status = resolve_status(self.media_type, self.status);
        let visible = field_visibility(status);

        let rating = if visible.rating {
            parse_rating(&self.rating)?
        } else {
            None
        };
        let review = if visible.review {
            Some(self.review.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        Ok(CreateMediaPayload {
            title: title.to_string(),
            media_type: self.media_type,
            status,
            rating,
            review,
        })
    }
}

fn parse_rating(raw: &str) -> Result<Option<u8>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u8>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(Some(rating)),
        _ => Err(ApiError::InvalidInput(
            "Rating must be a whole number from 1 to 5".to_string(),
        )),
    }
}

/// Text fields of a create request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMediaPayload {
    pub title: String,
    pub media_type: MediaType,
    pub status: MediaStatus,
    pub rating: Option<u8>,
    pub review: Option<String>,
}

impl CreateMediaPayload {
    /// Multipart text fields in send order; unset optionals are omitted
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("type", self.media_type.as_str().to_string()),
            ("status", self.status.as_str().to_string()),
        ];
        if let Some(rating) = self.rating {
            fields.push(("rating", rating.to_string()));
        }
        if let Some(review) = &self.review {
            fields.push(("review", review.clone()));
        }
        fields
    }
}

/// Cover image attached to a create request
#[derive(Debug, Clone, PartialEq)]
pub struct CoverImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl CoverImage {
    pub fn new(file_name: String, mime_type: String, bytes: Vec<u8>) -> Result<Self> {
        check_image(&mime_type, bytes.len())?;
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }
}

/// Rejects non-images and oversized files before any bytes are read
pub fn check_image(mime_type: &str, size: usize) -> Result<()> {
    if !mime_type.starts_with("image/") {
        return Err(ApiError::InvalidInput(
            "Cover must be an image file".to_string(),
        ));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ApiError::InvalidInput(
            "Cover image must be 5MB or smaller".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(title: &str, media_type: MediaType, status: MediaStatus) -> MediaDraft {
        MediaDraft {
            title: title.to_string(),
            media_type,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_movie_plan() {
        let d = MediaDraft::default();
        assert_eq!(d.media_type, MediaType::Movie);
        assert_eq!(d.status, MediaStatus::Plan);
        assert_eq!(d.visibility(), FieldVisibility { rating: false, review: false });
    }

    #[test]
    fn status_options_follow_type() {
        assert_eq!(
            allowed_statuses(MediaType::Movie),
            [MediaStatus::Plan, MediaStatus::Watched]
        );
        assert_eq!(
            allowed_statuses(MediaType::Book),
            [MediaStatus::Plan, MediaStatus::Read]
        );
    }

    #[test]
    fn switching_type_resets_incompatible_status() {
        let mut d = draft("Dune", MediaType::Movie, MediaStatus::Watched);
        d.set_type(MediaType::Book);
        assert_eq!(d.status, MediaStatus::Plan);

        let mut d = draft("Dune", MediaType::Book, MediaStatus::Plan);
        d.set_type(MediaType::Movie);
        assert_eq!(d.status, MediaStatus::Plan);

        d.set_status(MediaStatus::Read);
        assert_eq!(d.status, MediaStatus::Plan);
    }

    #[test]
    fn never_persists_cross_type_status() {
        // Drafts built directly (bypassing set_type) are still resolved.
        let payload = draft("Dune", MediaType::Movie, MediaStatus::Read)
            .to_payload()
            .unwrap();
        assert_eq!(payload.status, MediaStatus::Plan);

        let payload = draft("Emma", MediaType::Book, MediaStatus::Watched)
            .to_payload()
            .unwrap();
        assert_eq!(payload.status, MediaStatus::Plan);
    }

    #[test]
    fn plan_omits_rating_and_review() {
        let mut d = draft("Foo", MediaType::Book, MediaStatus::Plan);
        d.rating = "4".into();
        d.review = "left over from before".into();
        let payload = d.to_payload().unwrap();
        assert_eq!(
            payload.text_fields(),
            vec![
                ("title", "Foo".to_string()),
                ("type", "book".to_string()),
                ("status", "plan".to_string()),
            ]
        );
    }

    #[test]
    fn completed_items_carry_rating_and_review() {
        let mut d = draft("  Dune ", MediaType::Movie, MediaStatus::Watched);
        d.rating = " 5 ".into();
        d.review = "Spice.".into();
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.title, "Dune");
        assert_eq!(
            payload.text_fields(),
            vec![
                ("title", "Dune".to_string()),
                ("type", "movie".to_string()),
                ("status", "watched".to_string()),
                ("rating", "5".to_string()),
                ("review", "Spice.".to_string()),
            ]
        );
    }

    #[test]
    fn blank_optionals_are_absent() {
        let mut d = draft("Emma", MediaType::Book, MediaStatus::Read);
        d.review = "   ".into();
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.rating, None);
        assert_eq!(payload.review, None);
    }

    #[test]
    fn rejects_blank_title_and_bad_rating() {
        assert!(draft("  ", MediaType::Movie, MediaStatus::Plan).to_payload().is_err());

        let mut d = draft("Dune", MediaType::Movie, MediaStatus::Watched);
        for bad in ["0", "6", "4.5", "five"] {
            d.rating = bad.into();
            assert!(d.to_payload().is_err(), "rating {bad:?} accepted");
        }
    }

    #[test]
    fn image_checks() {
        assert!(check_image("image/png", 1024).is_ok());
        assert!(check_image("application/pdf", 10).is_err());
        assert!(check_image("image/jpeg", MAX_IMAGE_BYTES + 1).is_err());
        assert!(CoverImage::new("a.gif".into(), "image/gif".into(), vec![0; 8]).is_ok());
    }
}
