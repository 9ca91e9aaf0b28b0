//! Download, stage, and upload of a generated image.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use threadwright_core::{ImageUrl, MediaHandle};
use threadwright_error::{StorageError, StorageErrorKind, ThreadwrightResult};
use threadwright_interface::{AssetFetcher, MediaUploader};
use tracing::{debug, info, instrument, warn};

/// Moves an image from its generated URL onto the platform.
///
/// The image passes through a uniquely named temporary file that is removed
/// when staging finishes, whichever way it finishes.
#[derive(Clone)]
pub struct MediaStager {
    fetcher: Arc<dyn AssetFetcher>,
    uploader: Arc<dyn MediaUploader>,
    timeout: Duration,
    temp_dir: Option<PathBuf>,
}

impl std::fmt::Debug for MediaStager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStager")
            .field("timeout", &self.timeout)
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}

impl MediaStager {
    /// Stager with a download timeout, writing into the system temp dir.
    pub fn new(
        fetcher: Arc<dyn AssetFetcher>,
        uploader: Arc<dyn MediaUploader>,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            uploader,
            timeout,
            temp_dir: None,
        }
    }

    /// Write temporary files under `dir` instead.
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Download `url`, upload it, and return the platform handle.
    ///
    /// Every failure is logged and yields `None`.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn stage(&self, url: &ImageUrl) -> Option<MediaHandle> {
        let bytes = match tokio::time::timeout(self.timeout, self.fetcher.fetch(url)).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                warn!(error = %e, "Image download failed");
                return None;
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "Image download timed out");
                return None;
            }
        };

        if bytes.is_empty() {
            warn!("Image download returned an empty body");
            return None;
        }

        let file = match self.write_temp(&bytes) {
            Ok(file) => file,
            Err(e) => {
                warn!(error = %e, "Could not stage image");
                return None;
            }
        };
        debug!(path = %file.path().display(), bytes = bytes.len(), "Staged image");

        // `file` is dropped at the end of this scope, deleting it.
        match self.uploader.upload_media(file.path()).await {
            Ok(handle) => {
                info!(media = %handle, "Uploaded image");
                Some(handle)
            }
            Err(e) => {
                warn!(error = %e, "Media upload failed");
                None
            }
        }
    }

    fn write_temp(&self, bytes: &[u8]) -> ThreadwrightResult<NamedTempFile> {
        let prefix = format!("threadwright-{}-", uuid::Uuid::new_v4().simple());
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".jpg");

        let mut file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| StorageError::new(StorageErrorKind::TempFile(e.to_string())))?;

        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|e| StorageError::new(StorageErrorKind::FileWrite(e.to_string())))?;
        Ok(file)
    }
}
