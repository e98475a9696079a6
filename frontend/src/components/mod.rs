//! UI Components for the Excel Processor application.
//!
//! # Layout Components
//! - [`Header`] - Title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Drag & drop selection and upload
//! - [`SelectedFiles`] - Staged files with per-file removal
//! - [`ResultBanner`] - Download of the processed file
//! - [`ToastContainer`] - Notification stack

mod header;
mod upload;
mod file_list;
mod result;
mod toasts;
mod footer;

pub use header::*;
pub use upload::*;
pub use file_list::*;
pub use result::*;
pub use toasts::*;
pub use footer::*;
