//! Client-side validation of dropped or browsed files.
//!
//! Two checks run on every candidate:
//!
//! 1. **Type** - MIME type or extension must be a [`FileKind`]
//! 2. **Size** - at most [`UploadConfig::max_file_size`] bytes (inclusive)
//!
//! A batch is then settled according to the configured [`BatchPolicy`].
//! Under the default policy one bad file rejects the whole batch.
//!
//! # Example
//!
//! ```rust,ignore
//! use excel_processor::{validate_batch, UploadConfig};
//!
//! let verdict = validate_batch(dropped_files, &UploadConfig::default());
//! if verdict.is_rejected() {
//!     // notify once, add nothing
//! }
//! ```

use crate::config::{BatchPolicy, UploadConfig};
use crate::error::{FileRejection, ValidationResult};
use crate::models::FileKind;
use crate::selection::StagedFile;

/// Check a single candidate against the type and size gates.
pub fn validate_file<F: StagedFile>(file: &F, max_size: u64) -> ValidationResult<FileKind> {
    let name = file.name();
    let mime = file.mime_type();

    let kind = FileKind::detect(&name, &mime)
        .ok_or_else(|| FileRejection::UnsupportedType { name: name.clone(), mime })?;

    let size = file.size();
    if size > max_size {
        return Err(FileRejection::TooLarge { name, size, max: max_size });
    }

    Ok(kind)
}

/// Outcome of validating one drop batch.
#[derive(Debug)]
pub struct BatchVerdict<F> {
    /// Files to add, in drop order, with their detected kind.
    pub accepted: Vec<(F, FileKind)>,
    /// Reasons for every refused file.
    pub rejected: Vec<FileRejection>,
}

impl<F> BatchVerdict<F> {
    /// True when at least one file was refused.
    pub fn is_rejected(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Validate a whole batch and apply the batch policy.
///
/// Under [`BatchPolicy::AllOrNothing`] a single rejection empties
/// `accepted`; under [`BatchPolicy::PerFile`] the valid files are kept.
pub fn validate_batch<F: StagedFile>(files: Vec<F>, config: &UploadConfig) -> BatchVerdict<F> {
    let mut accepted = Vec::with_capacity(files.len());
    let mut rejected = Vec::new();

    for file in files {
        match validate_file(&file, config.max_file_size) {
            Ok(kind) => accepted.push((file, kind)),
            Err(rejection) => {
                log::debug!("Rejected file: {}", rejection);
                rejected.push(rejection);
            }
        }
    }

    if !rejected.is_empty() && config.batch_policy == BatchPolicy::AllOrNothing {
        accepted.clear();
    }

    BatchVerdict { accepted, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;
    use crate::selection::testing::MockFile;

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let at_limit = MockFile::xlsx("limit.xlsx", MAX_FILE_SIZE);
        assert_eq!(validate_file(&at_limit, MAX_FILE_SIZE), Ok(FileKind::Xlsx));

        let over = MockFile::xlsx("over.xlsx", MAX_FILE_SIZE + 1);
        assert!(matches!(
            validate_file(&over, MAX_FILE_SIZE),
            Err(FileRejection::TooLarge { size, .. }) if size == MAX_FILE_SIZE + 1
        ));
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = MockFile::new("huge.pdf", "application/pdf", MAX_FILE_SIZE * 2);
        assert!(matches!(
            validate_file(&file, MAX_FILE_SIZE),
            Err(FileRejection::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_valid_batch_keeps_order() {
        let files = vec![
            MockFile::xlsx("a.xlsx", 10),
            MockFile::new("b.csv", "text/csv", 20),
            MockFile::new("c.xls", "application/vnd.ms-excel", 30),
        ];
        let verdict = validate_batch(files, &UploadConfig::default());

        assert!(!verdict.is_rejected());
        let names: Vec<_> = verdict.accepted.iter().map(|(f, _)| f.name()).collect();
        assert_eq!(names, vec!["a.xlsx", "b.csv", "c.xls"]);
        let kinds: Vec<_> = verdict.accepted.iter().map(|(_, k)| *k).collect();
        assert_eq!(kinds, vec![FileKind::Xlsx, FileKind::Csv, FileKind::Xls]);
    }

    #[test]
    fn test_mixed_batch_rejected_as_unit() {
        let files = vec![
            MockFile::xlsx("good.xlsx", 10),
            MockFile::new("bad.docx", "application/msword", 10),
        ];
        let verdict = validate_batch(files, &UploadConfig::default());

        assert!(verdict.accepted.is_empty());
        assert_eq!(verdict.rejected.len(), 1);
        assert_eq!(verdict.rejected[0].file_name(), "bad.docx");
    }

    #[test]
    fn test_per_file_policy_keeps_valid_files() {
        let config = UploadConfig {
            batch_policy: BatchPolicy::PerFile,
            ..UploadConfig::default()
        };
        let files = vec![
            MockFile::xlsx("good.xlsx", 10),
            MockFile::xlsx("big.xlsx", MAX_FILE_SIZE + 1),
        ];
        let verdict = validate_batch(files, &config);

        assert_eq!(verdict.accepted.len(), 1);
        assert_eq!(verdict.rejected.len(), 1);
    }
}
