//! Application configuration.
//!
//! Centralized configuration for the Excel Processor frontend.
//! Everything is compiled in; there is no environment or persisted state.

use std::time::Duration;

use excel_processor::{FileKind, ToastOptions, ToastPosition, UploadConfig};

/// Backend base URL.
///
/// Empty means same origin: the processing endpoint is served next to
/// the static assets.
pub const BACKEND_URL: &str = "";

/// Application name, used for the page title and header.
pub const APP_NAME: &str = "Excel Processor";

/// Subtitle shown under the header title.
pub const APP_TAGLINE: &str = "Upload your Excel files for instant processing";

/// MIME type attached to the downloadable result.
pub const RESULT_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Toasts stay on screen until dismissed.
pub const TOAST_AUTO_CLOSE: Option<Duration> = None;

/// Toast stack anchor.
pub const TOAST_POSITION: ToastPosition = ToastPosition::TopCenter;

/// Upload settings for the widget.
pub fn upload_config() -> UploadConfig {
    UploadConfig::with_base_url(BACKEND_URL)
}

/// Presentation settings for the toast layer.
pub fn toast_options() -> ToastOptions {
    ToastOptions {
        auto_close: TOAST_AUTO_CLOSE,
        position: TOAST_POSITION,
    }
}

/// `accept` attribute for the hidden file input.
pub fn file_input_accept() -> String {
    FileKind::accept_attribute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_endpoint() {
        assert_eq!(upload_config().endpoint, "/api/process-excel");
    }

    #[test]
    fn test_result_mime_matches_xlsx() {
        assert_eq!(RESULT_MIME_TYPE, FileKind::Xlsx.mime_type());
    }

    #[test]
    fn test_toasts_never_auto_close() {
        assert_eq!(toast_options(), ToastOptions::default());
    }
}
