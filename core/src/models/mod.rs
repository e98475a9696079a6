//! Domain models for the upload workflow.
//!
//! - [`FileKind`] - Recognised spreadsheet formats
//! - [`FileId`] - Identity of an entry in the selection
//! - [`ProcessedResult`] - Opaque payload returned by the processing endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// File Kinds
// =============================================================================

/// A spreadsheet format accepted by the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Office Open XML workbook (`.xlsx`)
    Xlsx,
    /// Legacy BIFF workbook (`.xls`)
    Xls,
    /// Comma-separated values (`.csv`)
    Csv,
}

impl FileKind {
    /// Every accepted kind, in display order.
    pub const ALL: [FileKind; 3] = [FileKind::Xlsx, FileKind::Xls, FileKind::Csv];

    /// MIME type the browser reports for this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            FileKind::Xls => "application/vnd.ms-excel",
            FileKind::Csv => "text/csv",
        }
    }

    /// File extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Xlsx => ".xlsx",
            FileKind::Xls => ".xls",
            FileKind::Csv => ".csv",
        }
    }

    /// Recognise a file from its MIME type or, failing that, its name.
    ///
    /// Either match is enough: browsers frequently report an empty or
    /// generic MIME type for `.csv` and `.xls` files.
    pub fn detect(name: &str, mime: &str) -> Option<FileKind> {
        let mime = mime.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime_type() == mime)
            .or_else(|| Self::from_extension(name))
    }

    /// Match on the file-name extension only (case-insensitive).
    pub fn from_extension(name: &str) -> Option<FileKind> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension()[1..].eq_ignore_ascii_case(ext))
    }

    /// Value for an `<input type="file" accept=...>` attribute.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .flat_map(|kind| [kind.extension(), kind.mime_type()])
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Xlsx => write!(f, "XLSX"),
            FileKind::Xls => write!(f, "XLS"),
            FileKind::Csv => write!(f, "CSV"),
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

/// Identity of a selected file.
///
/// Allocated by the selection, never reused while the selection lives, so
/// two files with the same name stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) u64);

impl FileId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// Processed Result
// =============================================================================

/// Binary artifact returned by the processing endpoint.
///
/// Its structure is unknown to this system: it is handed to the page and
/// downloaded verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct ProcessedResult {
    bytes: Vec<u8>,
}

impl ProcessedResult {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ProcessedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessedResult")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl From<Vec<u8>> for ProcessedResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Format a byte count the way the file list shows it, e.g. `"12.5 KB"`.
pub fn format_size_kb(size: u64) -> String {
    format!("{:.1} KB", size as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime() {
        assert_eq!(
            FileKind::detect("report", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            Some(FileKind::Xlsx)
        );
        assert_eq!(FileKind::detect("legacy", "application/vnd.ms-excel"), Some(FileKind::Xls));
        assert_eq!(FileKind::detect("data", "TEXT/CSV"), Some(FileKind::Csv));
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(FileKind::detect("Budget.XLSX", ""), Some(FileKind::Xlsx));
        assert_eq!(FileKind::detect("export.csv", "application/octet-stream"), Some(FileKind::Csv));
        assert_eq!(FileKind::detect("old.xls", ""), Some(FileKind::Xls));
    }

    #[test]
    fn test_detect_rejects_other_files() {
        assert_eq!(FileKind::detect("notes.txt", "text/plain"), None);
        assert_eq!(FileKind::detect("xlsx", ""), None);
        assert_eq!(FileKind::detect("archive.xlsx.zip", "application/zip"), None);
    }

    #[test]
    fn test_accept_attribute_lists_extensions_and_mimes() {
        let accept = FileKind::accept_attribute();
        assert!(accept.starts_with(".xlsx,"));
        assert!(accept.contains("application/vnd.ms-excel"));
        assert!(accept.ends_with("text/csv"));
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size_kb(0), "0.0 KB");
        assert_eq!(format_size_kb(1536), "1.5 KB");
        assert_eq!(format_size_kb(10_485_760), "10240.0 KB");
    }

    #[test]
    fn test_processed_result_debug_hides_bytes() {
        let result = ProcessedResult::from(vec![1, 2, 3]);
        assert_eq!(format!("{:?}", result), "ProcessedResult { len: 3 }");
        assert_eq!(result.len(), 3);
    }
}
