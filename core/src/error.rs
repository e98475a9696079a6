//! Error types for the upload workflow.
//!
//! - [`FileRejection`] - A candidate file failed client-side validation
//! - [`UploadError`] - Submitting the selection failed
//!
//! Neither type ever escapes the widget: both are turned into user-facing
//! notifications. They exist so that every failure path carries a typed
//! reason and a display string.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Why a candidate file was refused at drop/selection time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// Neither the MIME type nor the extension is a recognised spreadsheet.
    #[error("Unsupported file type for '{name}' ({mime})")]
    UnsupportedType { name: String, mime: String },

    /// File exceeds the size ceiling.
    #[error("File '{name}' is {size} bytes, limit is {max} bytes")]
    TooLarge { name: String, size: u64, max: u64 },
}

impl FileRejection {
    /// Name of the rejected file.
    pub fn file_name(&self) -> &str {
        match self {
            FileRejection::UnsupportedType { name, .. } => name,
            FileRejection::TooLarge { name, .. } => name,
        }
    }
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors raised while building, sending or reading an upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Server answered with a non-2xx status.
    #[error("Upload failed: {status_text}")]
    Http { status: u16, status_text: String },

    /// Request never completed (DNS, CORS, connection reset...).
    #[error("{0}")]
    Network(String),

    /// Multipart body could not be assembled.
    #[error("{0}")]
    Form(String),

    /// Response body could not be read as binary.
    #[error("{0}")]
    Payload(String),

    /// A preview handle could not be created for a file.
    #[error("Failed to create preview: {0}")]
    Preview(String),

    /// Submit was called while a request is already in flight.
    #[error("An upload is already in progress.")]
    Busy,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for single-file validation.
pub type ValidationResult<T> = Result<T, FileRejection>;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status_text() {
        let err = UploadError::Http {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "Upload failed: Internal Server Error");
    }

    #[test]
    fn test_transport_errors_display_raw_message() {
        assert_eq!(UploadError::Network("connection reset".into()).to_string(), "connection reset");
        assert_eq!(UploadError::Payload(String::new()).to_string(), "");
    }

    #[test]
    fn test_rejection_format() {
        let err = FileRejection::TooLarge {
            name: "big.xlsx".into(),
            size: 20,
            max: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("big.xlsx"));
        assert!(msg.contains("20"));
        assert_eq!(err.file_name(), "big.xlsx");
    }
}
