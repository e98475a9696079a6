//! Object URLs with scoped lifetime.
//!
//! [`ObjectUrl`] revokes itself on `Drop`, which is how preview handles and
//! the download reference get released on every exit path.

use excel_processor::{PreviewFactory, UploadError, UploadResult};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::types::{describe_js_error, AppError, AppResult, BrowserFile};

/// A `blob:` URL owned by this value.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create a URL referencing an existing blob or file.
    pub fn from_blob(blob: &Blob) -> AppResult<Self> {
        let url = Url::create_object_url_with_blob(blob)
            .map_err(|e| AppError::ObjectUrl(describe_js_error(&e)))?;
        Ok(Self { url })
    }

    /// Copy `bytes` into a new blob of the given MIME type.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> AppResult<Self> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| AppError::ObjectUrl(describe_js_error(&e)))?;
        Self::from_blob(&blob)
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("Failed to revoke {}: {}", self.url, describe_js_error(&e));
        }
    }
}

/// Creates one [`ObjectUrl`] preview per selected file.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlFactory;

impl PreviewFactory<BrowserFile> for ObjectUrlFactory {
    type Handle = ObjectUrl;

    fn create(&self, file: &BrowserFile) -> UploadResult<ObjectUrl> {
        ObjectUrl::from_blob(file.as_file()).map_err(|e| UploadError::Preview(e.to_string()))
    }
}
