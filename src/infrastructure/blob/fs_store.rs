//! Filesystem-backed blob store.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

use super::store::{BlobError, BlobResult, BlobStore, MediaKind};

/// Blob store writing into a local media root.
///
/// Files are named by a fresh UUID per upload and served by the HTTP layer
/// under `base_url` (see the `/media` route). Size limits come from
/// configuration; images and videos may differ.
pub struct FsBlobStore {
    root: PathBuf,
    base_url: String,
    max_image_bytes: usize,
    max_video_bytes: usize,
}

impl FsBlobStore {
    /// Creates a store rooted at `root`, served under `base_url`.
    ///
    /// The root directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::Io`] if the root directory cannot be created.
    pub async fn new(
        root: impl Into<PathBuf>,
        base_url: impl Into<String>,
        max_image_bytes: usize,
        max_video_bytes: usize,
    ) -> BlobResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        Ok(Self {
            root,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_image_bytes,
            max_video_bytes,
        })
    }

    fn limit_for(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Image => self.max_image_bytes,
            MediaKind::Video => self.max_video_bytes,
        }
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn upload(&self, bytes: Vec<u8>, kind: MediaKind) -> BlobResult<String> {
        if bytes.is_empty() {
            return Err(BlobError::Empty);
        }

        let limit = self.limit_for(kind);
        if bytes.len() > limit {
            return Err(BlobError::TooLarge {
                got: bytes.len(),
                limit,
            });
        }

        let name = format!("{}.{}", Uuid::new_v4(), kind.extension());
        let path = self.root.join(&name);

        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "Stored blob");

        Ok(format!("{}/{}", self.base_url, name))
    }
}
