//! DTOs for media upload.

use serde::Serialize;

/// URLs assigned to uploaded media.
///
/// `images` preserves the order the parts appeared in the multipart body.
#[derive(Debug, Serialize)]
pub struct MediaUploadResponse {
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}
