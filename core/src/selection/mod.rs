//! The ordered collection of files staged for upload.
//!
//! Each entry owns a preview handle created by a [`PreviewFactory`]. The
//! handle is released by its `Drop` impl, so removing an entry or clearing
//! the selection releases it exactly once with no explicit revoke call.

use crate::error::UploadResult;
use crate::models::{FileId, FileKind};

// =============================================================================
// Seams
// =============================================================================

/// A file-like value the widget can validate and upload.
///
/// Implemented by the browser `File` wrapper in the frontend and by plain
/// structs in tests.
pub trait StagedFile: Clone {
    /// File name including extension.
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// MIME type as reported by the platform, possibly empty.
    fn mime_type(&self) -> String;
}

/// Creates the transient preview reference attached to a selected file.
///
/// The returned handle must release its resource on `Drop`.
pub trait PreviewFactory<F> {
    type Handle;

    fn create(&self, file: &F) -> UploadResult<Self::Handle>;
}

// =============================================================================
// Selected File
// =============================================================================

/// A file accepted into the selection.
#[derive(Debug)]
pub struct SelectedFile<F, H> {
    id: FileId,
    file: F,
    name: String,
    size: u64,
    mime_type: String,
    kind: FileKind,
    preview: H,
}

impl<F: StagedFile, H> SelectedFile<F, H> {
    fn new(id: FileId, file: F, kind: FileKind, preview: H) -> Self {
        Self {
            id,
            name: file.name(),
            size: file.size(),
            mime_type: file.mime_type(),
            file,
            kind,
            preview,
        }
    }
}

impl<F, H> SelectedFile<F, H> {
    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn preview(&self) -> &H {
        &self.preview
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Ordered list of selected files, in insertion order.
#[derive(Debug)]
pub struct Selection<F, H> {
    entries: Vec<SelectedFile<F, H>>,
    next_id: u64,
}

impl<F, H> Default for Selection<F, H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<F: StagedFile, H> Selection<F, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append validated files, creating one preview handle each.
    ///
    /// All handles are created before anything is appended. If one fails,
    /// the handles already created are dropped and the selection is left
    /// untouched.
    pub fn extend_with<P>(&mut self, files: Vec<(F, FileKind)>, factory: &P) -> UploadResult<Vec<FileId>>
    where
        P: PreviewFactory<F, Handle = H>,
    {
        let mut staged = Vec::with_capacity(files.len());
        for (file, kind) in files {
            let preview = factory.create(&file)?;
            staged.push((file, kind, preview));
        }

        let ids = staged
            .into_iter()
            .map(|(file, kind, preview)| self.push(file, kind, preview))
            .collect();
        Ok(ids)
    }

    /// Append one file with an already created handle.
    pub fn push(&mut self, file: F, kind: FileKind, preview: H) -> FileId {
        let id = FileId(self.next_id);
        self.next_id += 1;
        self.entries.push(SelectedFile::new(id, file, kind, preview));
        id
    }
}

impl<F, H> Selection<F, H> {
    /// Remove the entry with this id, releasing its handle.
    ///
    /// Returns `false` when no such entry exists.
    pub fn remove(&mut self, id: FileId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every entry, releasing all handles. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedFile<F, H>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<FileId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Test doubles
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::UploadError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub struct MockFile {
        pub name: String,
        pub mime: String,
        pub size: u64,
    }

    impl MockFile {
        pub fn new(name: &str, mime: &str, size: u64) -> Self {
            Self {
                name: name.to_string(),
                mime: mime.to_string(),
                size,
            }
        }

        pub fn xlsx(name: &str, size: u64) -> Self {
            Self::new(name, FileKind::Xlsx.mime_type(), size)
        }
    }

    impl StagedFile for MockFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn size(&self) -> u64 {
            self.size
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }
    }

    /// Handle that counts its own release.
    #[derive(Debug)]
    pub struct CountingHandle {
        pub serial: usize,
        released: Rc<Cell<usize>>,
    }

    impl Drop for CountingHandle {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct CountingFactory {
        pub created: Rc<Cell<usize>>,
        pub released: Rc<Cell<usize>>,
        pub fail_on: Option<String>,
    }

    impl CountingFactory {
        pub fn failing_on(name: &str) -> Self {
            Self {
                fail_on: Some(name.to_string()),
                ..Self::default()
            }
        }

        pub fn live(&self) -> usize {
            self.created.get() - self.released.get()
        }
    }

    impl PreviewFactory<MockFile> for CountingFactory {
        type Handle = CountingHandle;

        fn create(&self, file: &MockFile) -> UploadResult<CountingHandle> {
            if self.fail_on.as_deref() == Some(file.name.as_str()) {
                return Err(UploadError::Preview(format!("cannot preview {}", file.name)));
            }
            let serial = self.created.get();
            self.created.set(serial + 1);
            Ok(CountingHandle {
                serial,
                released: self.released.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn selection_of(names: &[&str], factory: &CountingFactory) -> Selection<MockFile, CountingHandle> {
        let mut selection = Selection::new();
        let files = names
            .iter()
            .map(|n| (MockFile::xlsx(n, 100), FileKind::Xlsx))
            .collect();
        selection.extend_with(files, factory).unwrap();
        selection
    }

    #[test]
    fn test_extend_assigns_distinct_handles_in_order() {
        let factory = CountingFactory::default();
        let selection = selection_of(&["a.xlsx", "b.xlsx", "c.xlsx"], &factory);

        let names: Vec<_> = selection.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx", "c.xlsx"]);
        let serials: Vec<_> = selection.iter().map(|f| f.preview().serial).collect();
        assert_eq!(serials, vec![0, 1, 2]);
        assert_eq!(factory.live(), 3);
    }

    #[test]
    fn test_remove_releases_only_that_handle() {
        let factory = CountingFactory::default();
        let mut selection = selection_of(&["a.xlsx", "b.xlsx"], &factory);
        let ids = selection.ids();

        assert!(selection.remove(ids[0]));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.iter().next().unwrap().name(), "b.xlsx");
        assert_eq!(factory.released.get(), 1);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let factory = CountingFactory::default();
        let mut selection = selection_of(&["a.xlsx", "b.xlsx"], &factory);
        let first = selection.ids()[0];

        assert!(selection.remove(first));
        assert!(!selection.remove(first));
        assert_eq!(selection.len(), 1);
        assert_eq!(factory.released.get(), 1);
    }

    #[test]
    fn test_same_name_entries_are_distinct() {
        let factory = CountingFactory::default();
        let mut selection = selection_of(&["dup.xlsx", "dup.xlsx"], &factory);
        let second = selection.ids()[1];

        assert!(selection.remove(second));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.ids()[0].get(), 0);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let factory = CountingFactory::default();
        let mut selection = selection_of(&["a.xlsx"], &factory);
        let old = selection.ids()[0];

        assert_eq!(selection.clear(), 1);
        assert_eq!(factory.live(), 0);

        let file = MockFile::xlsx("b.xlsx", 1);
        let preview = factory.create(&file).unwrap();
        let new = selection.push(file, FileKind::Xlsx, preview);
        assert_ne!(old, new);
        assert!(!selection.remove(old));
    }

    #[test]
    fn test_failed_preview_leaves_selection_untouched() {
        let factory = CountingFactory::failing_on("b.xlsx");
        let mut selection = Selection::new();
        let files = vec![
            (MockFile::xlsx("a.xlsx", 1), FileKind::Xlsx),
            (MockFile::xlsx("b.xlsx", 1), FileKind::Xlsx),
        ];

        assert!(selection.extend_with(files, &factory).is_err());
        assert!(selection.is_empty());
        assert_eq!(factory.created.get(), 1);
        assert_eq!(factory.live(), 0);
    }

    #[test]
    fn test_dropping_selection_releases_everything() {
        let factory = CountingFactory::default();
        {
            let _selection = selection_of(&["a.xlsx", "b.xlsx"], &factory);
        }
        assert_eq!(factory.released.get(), 2);
    }
}
