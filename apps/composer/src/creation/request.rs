//! Composition request model and its multipart form intake.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::ComposeError;

pub const DEFAULT_FONT_NAME: &str = "Helvetica";
pub const DEFAULT_FONT_SIZE: i32 = 12;

/// An uploaded image as received, before decoding.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl ImageUpload {
    /// Format hint for the decoder: the file extension if there is one, else the MIME type.
    pub fn format_hint(&self) -> Option<&str> {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
            .filter(|ext| !ext.is_empty())
            .or(self.content_type.as_deref())
    }
}

/// Everything needed to compose one document. Owned by a single composition call.
#[derive(Debug, Clone)]
pub struct CompositionRequest {
    pub title: String,
    pub content: String,
    pub font_name: String,
    pub font_size_pt: i32,
    pub author: String,
    pub image: Option<ImageUpload>,
}

impl CompositionRequest {
    /// A request with the default font settings and no image.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> CompositionRequest {
        CompositionRequest {
            title: title.into(),
            content: content.into(),
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size_pt: DEFAULT_FONT_SIZE,
            author: author.into(),
            image: None,
        }
    }

    /// Rejects requests that must not reach layout.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.title.trim().is_empty() {
            return Err(ComposeError::InvalidArgument("title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(ComposeError::InvalidArgument(
                "content is required".to_string(),
            ));
        }
        if self.font_size_pt <= 0 {
            return Err(ComposeError::InvalidArgument(format!(
                "fontSize must be a positive integer, got {}",
                self.font_size_pt
            )));
        }
        Ok(())
    }

    /// Reads a `multipart/form-data` body with the fields
    /// `title`, `content`, `fontName`, `fontSize`, `image` and `author`.
    ///
    /// Missing optional fields take their defaults; an empty `image` part counts as no
    /// image. Unknown fields are ignored.
    pub async fn from_multipart(
        mut multipart: Multipart,
        default_author: &str,
    ) -> Result<CompositionRequest, ComposeError> {
        let mut title = None;
        let mut content = None;
        let mut font_name = None;
        let mut font_size = None;
        let mut author = None;
        let mut image = None;

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "title" => title = Some(field.text().await.map_err(malformed)?),
                "content" => content = Some(field.text().await.map_err(malformed)?),
                "fontName" => font_name = Some(field.text().await.map_err(malformed)?),
                "fontSize" => font_size = Some(field.text().await.map_err(malformed)?),
                "author" => author = Some(field.text().await.map_err(malformed)?),
                "image" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(malformed)?;
                    image = (!bytes.is_empty()).then_some(ImageUpload {
                        bytes,
                        file_name,
                        content_type,
                    });
                }
                _ => {}
            }
        }

        let font_size_pt = match font_size.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_FONT_SIZE,
            Some(raw) => raw.parse::<i32>().map_err(|_| {
                ComposeError::InvalidArgument(format!("fontSize must be an integer, got {raw:?}"))
            })?,
        };

        Ok(CompositionRequest {
            title: title
                .ok_or_else(|| ComposeError::InvalidArgument("title is required".to_string()))?,
            content: content
                .ok_or_else(|| ComposeError::InvalidArgument("content is required".to_string()))?,
            font_name: font_name
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_FONT_NAME.to_string()),
            font_size_pt,
            author: author
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| default_author.to_string()),
            image,
        })
    }
}

fn malformed(e: MultipartError) -> ComposeError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ComposeError::PayloadTooLarge(e.body_text());
    }
    ComposeError::InvalidArgument(format!("malformed multipart body: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(file_name: Option<&str>, content_type: Option<&str>) -> ImageUpload {
        ImageUpload {
            bytes: Bytes::from_static(b"x"),
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
        }
    }

    #[test]
    fn test_format_hint_prefers_extension() {
        assert_eq!(upload(Some("photo.PNG"), Some("image/jpeg")).format_hint(), Some("PNG"));
        assert_eq!(upload(Some("photo"), Some("image/jpeg")).format_hint(), Some("image/jpeg"));
        assert_eq!(upload(Some("photo."), None).format_hint(), None);
        assert_eq!(upload(None, None).format_hint(), None);
    }

    #[test]
    fn test_new_uses_defaults() {
        let req = CompositionRequest::new("Title", "Body", "Someone");
        assert_eq!(req.font_name, "Helvetica");
        assert_eq!(req.font_size_pt, 12);
        assert!(req.image.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_title = CompositionRequest::new("  ", "Body", "a");
        assert!(matches!(blank_title.validate(), Err(ComposeError::InvalidArgument(_))));

        let blank_content = CompositionRequest::new("Title", "\n", "a");
        assert!(matches!(blank_content.validate(), Err(ComposeError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_font_size() {
        for size in [0, -12] {
            let mut req = CompositionRequest::new("Title", "Body", "a");
            req.font_size_pt = size;
            assert!(
                matches!(req.validate(), Err(ComposeError::InvalidArgument(_))),
                "size {size} should be rejected"
            );
        }
    }
}
