//! Blob store trait and error types.

use async_trait::async_trait;

/// What kind of media a blob is; decides the stored file extension and the
/// applicable size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// File extension the blob is stored under.
    ///
    /// Uploads are normalized to one format per kind, so the extension is
    /// fixed rather than derived from the client-supplied filename.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Image => "jpg",
            Self::Video => "mp4",
        }
    }
}

/// Errors that can occur storing a blob.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("blob is empty")]
    Empty,
    #[error("blob of {got} bytes exceeds the {limit}-byte limit")]
    TooLarge { got: usize, limit: usize },
    #[error("blob write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for blob operations.
pub type BlobResult<T> = Result<T, BlobError>;

/// Trait for durable media storage.
///
/// Accepts raw bytes and returns a durable, publicly servable URL. The
/// backing store is an opaque capability: callers never learn where bytes
/// live beyond the returned URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::blob::FsBlobStore`] - local filesystem store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` and returns the durable URL it is served under.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::Empty`] for zero-length input,
    /// [`BlobError::TooLarge`] when the kind's size limit is exceeded, and
    /// [`BlobError::Io`] when the write fails.
    async fn upload(&self, bytes: Vec<u8>, kind: MediaKind) -> BlobResult<String>;
}
