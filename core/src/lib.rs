//! # Excel Processor - upload workflow core
//!
//! Platform-neutral model of the Excel Processor front end: which files a
//! user may stage, how the staged selection is submitted, and what the
//! user is told about it. The browser crate plugs DOM and HTTP
//! implementations into the seams defined here.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Drop/Pick  │────▶│ Validation  │────▶│  Selection  │────▶│  Transport  │
//! │ (StagedFile)│     │ (type/size) │     │ (previews)  │     │ (multipart) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                                    │
//!                     ┌─────────────┐     ┌─────────────┐            │
//!                     │  Notifier   │◀────│ ResultStore │◀───────────┘
//!                     │  (toasts)   │     │ (download)  │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Rejection and upload error types
//! - [`config`] - Endpoint, limits and batch policy
//! - [`models`] - File kinds, ids and the processed payload
//! - [`validation`] - Type/size gates and batch policy
//! - [`selection`] - Staged files with RAII preview handles
//! - [`notify`] - Severity, toast options and the notification center
//! - [`upload`] - The widget state machine and the transport seam
//! - [`result`] - The single stored result

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Selection
pub mod selection;
pub mod validation;

// Feedback
pub mod notify;

// Workflow
pub mod result;
pub mod upload;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    BatchPolicy, UploadConfig, DOWNLOAD_FILE_NAME, FIELD_PREFIX, MAX_FILE_SIZE, PROCESS_ENDPOINT,
};

pub use error::{FileRejection, UploadError, UploadResult, ValidationResult};

pub use models::{format_size_kb, FileId, FileKind, ProcessedResult};

pub use selection::{PreviewFactory, SelectedFile, Selection, StagedFile};

pub use validation::{validate_batch, validate_file, BatchVerdict};

pub use notify::{
    Notification, NotificationCenter, NotificationHandle, Notifier, Severity, ToastOptions,
    ToastPosition,
};

pub use upload::{
    DropOutcome, FormPart, SubmitOutcome, Transport, UploadRequest, UploadState, UploadWidget,
    MSG_EMPTY_SELECTION, MSG_GENERIC_FAILURE, MSG_REJECTED, MSG_SUCCESS,
};

pub use result::{ResultStore, StoredResult};
