//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Browser `File` wrapper and list rows
//! - **Drag State** - Nesting-aware drag-over tracking
//! - **Error Types** - Frontend error handling

use std::fmt;

use excel_processor::{format_size_kb, FileId, FileKind, SelectedFile, StagedFile};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FileList};

// =============================================================================
// File Types
// =============================================================================

/// A browser `File` staged for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl StagedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// Collect a `FileList` from an input or a drop event.
pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::new)
        .collect()
}

/// Display row for the selected-files list.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub id: FileId,
    pub name: String,
    pub size_label: String,
    pub kind: FileKind,
}

impl<H> From<&SelectedFile<BrowserFile, H>> for FileRow {
    fn from(entry: &SelectedFile<BrowserFile, H>) -> Self {
        Self {
            id: entry.id(),
            name: entry.name().to_string(),
            size_label: format_size_kb(entry.size()),
            kind: entry.kind(),
        }
    }
}

// =============================================================================
// Drag State
// =============================================================================

/// Tracks whether a drag is over the drop zone.
///
/// Browsers fire `dragenter`/`dragleave` for every child element the
/// pointer crosses, so a single flag flickers. Counting enters against
/// leaves keeps the zone active until the pointer really leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragDepth(u32);

impl DragDepth {
    pub fn enter(&mut self) {
        self.0 += 1;
    }

    pub fn leave(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Called on drop, after which no matching `dragleave` arrives.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn is_active(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Upload failures are handled by the widget; these cover the page-level
/// browser calls around it.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Creating or revoking an object URL failed.
    ObjectUrl(String),
    /// Triggering the download failed.
    Download(String),
    /// Any other DOM call failed.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ObjectUrl(msg) => write!(f, "Could not prepare file: {}", msg),
            AppError::Download(msg) => write!(f, "Download failed: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

/// Best-effort message from a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::Download("no body".into()).to_string(),
            "Download failed: no body"
        );
        assert!(AppError::ObjectUrl("quota".into()).to_string().contains("quota"));
    }

    #[test]
    fn test_drag_depth_survives_child_crossing() {
        let mut depth = DragDepth::default();
        depth.enter(); // zone
        depth.enter(); // icon inside the zone
        depth.leave(); // zone, as the pointer leaves the icon
        assert!(depth.is_active());

        depth.leave();
        assert!(!depth.is_active());
    }

    #[test]
    fn test_drag_depth_reset_on_drop() {
        let mut depth = DragDepth::default();
        depth.enter();
        depth.enter();
        depth.reset();
        assert!(!depth.is_active());

        // Stray leave after a drop does not underflow
        depth.leave();
        assert_eq!(depth, DragDepth::default());
    }
}
