//! Collection Endpoints
//!
//! List, fetch, create and delete media items.

use reqwest::multipart::{Form, Part};
use serde::de::IgnoredAny;
use serde_json::Value;

use super::MediaApi;
use crate::draft::{CoverImage, CreateMediaPayload};
use crate::error::{ApiError, Result};
use crate::models::{MediaId, MediaItem};

impl MediaApi {
    /// `GET {collection}`: every item, in backend order
    pub async fn list(&self) -> Result<Vec<MediaItem>> {
        let request = self.client.get(self.config.collection_url());
        self.send::<Vec<MediaItem>>("list", request)
            .await?
            .into_payload()
    }

    /// `GET {collection}/{id}`
    pub async fn get(&self, id: &MediaId) -> Result<MediaItem> {
        let request = self.client.get(self.config.item_url(id));
        self.send::<MediaItem>("get", request).await?.into_payload()
    }

    /// `POST {collection}` as multipart, with an optional `image` file part.
    ///
    /// Returns the created item when the backend echoes one back in a shape
    /// that parses; any other payload still counts as a successful create.
    pub async fn create(
        &self,
        payload: &CreateMediaPayload,
        image: Option<CoverImage>,
    ) -> Result<Option<MediaItem>> {
        let mut form = Form::new();
        for (name, value) in payload.text_fields() {
            form = form.text(name, value);
        }
        if let Some(image) = image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)
                .map_err(|e| ApiError::InvalidInput(format!("Unsupported image type: {e}")))?;
            form = form.part("image", part);
        }

        let request = self.client.post(self.config.collection_url()).multipart(form);
        let echoed = self.send::<Value>("create", request).await?.payload;
        Ok(echoed_item(echoed))
    }

    /// `DELETE {collection}/{id}`
    pub async fn delete(&self, id: &MediaId) -> Result<()> {
        let request = self.client.delete(self.config.item_url(id));
        self.send::<IgnoredAny>("delete", request).await?;
        Ok(())
    }
}

/// The created item, if the echoed payload is one
fn echoed_item(payload: Option<Value>) -> Option<MediaItem> {
    serde_json::from_value(payload?).ok()
}
