//! Handler for media upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::api::dto::media::MediaUploadResponse;
use crate::error::AppError;
use crate::infrastructure::blob::{BlobError, MediaKind};
use crate::state::AppState;

/// Uploads product media to the blob store.
///
/// # Endpoint
///
/// `POST /api/admin/media`
///
/// # Request Body
///
/// Multipart form data with:
/// - `images` - one or more image parts
/// - `video`  - at most one video part
///
/// Unknown part names are rejected rather than silently ignored, so typos
/// surface at the boundary instead of producing half-uploaded products.
///
/// # Response
///
/// The durable URLs assigned to each uploaded part, in order. Upload is
/// all-or-nothing per request: the first failing part fails the call.
///
/// # Errors
///
/// Returns 400 Bad Request for empty or oversized parts, unknown part
/// names, or when no parts are present.
pub async fn upload_media_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MediaUploadResponse>, AppError> {
    let mut images = Vec::new();
    let mut video = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request("Malformed multipart body", json!({ "reason": e.to_string() })))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let kind = match name.as_str() {
            "images" => MediaKind::Image,
            "video" => MediaKind::Video,
            other => {
                return Err(AppError::bad_request(
                    "Unknown multipart field",
                    json!({ "field": other }),
                ));
            }
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request("Failed to read multipart field", json!({ "reason": e.to_string() })))?
            .to_vec();

        let size = bytes.len();
        let url = state
            .blob_store
            .upload(bytes, kind)
            .await
            .map_err(map_blob_error)?;

        debug!(field = %name, size, url = %url, "Uploaded media blob");

        match kind {
            MediaKind::Image => images.push(url),
            MediaKind::Video => {
                if video.replace(url).is_some() {
                    return Err(AppError::bad_request(
                        "At most one video is allowed",
                        json!({}),
                    ));
                }
            }
        }
    }

    if images.is_empty() && video.is_none() {
        return Err(AppError::bad_request("No media provided", json!({})));
    }

    Ok(Json(MediaUploadResponse { images, video }))
}

fn map_blob_error(e: BlobError) -> AppError {
    match e {
        BlobError::Empty => AppError::bad_request("Empty media part", json!({})),
        BlobError::TooLarge { got, limit } => AppError::bad_request(
            "Media exceeds the size limit",
            json!({ "size": got, "limit": limit }),
        ),
        BlobError::Io(e) => {
            tracing::error!(error = %e, "Blob write failed");
            AppError::internal("Failed to store media", json!({}))
        }
    }
}
