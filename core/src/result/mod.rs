//! Holder for the most recent processed result.
//!
//! The page keeps at most one download handle, plus the byte size of the
//! payload it points at. The payload itself is owned by the handle (a blob
//! URL in the browser), so the store never holds a second copy. Storing a
//! new result drops the previous handle, releasing it instead of leaking.

use crate::config::DOWNLOAD_FILE_NAME;

/// Download handle for a processed result.
#[derive(Debug)]
pub struct StoredResult<H> {
    size: usize,
    handle: H,
}

impl<H> StoredResult<H> {
    /// Payload size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Filename the result is saved under.
    pub fn file_name(&self) -> &'static str {
        DOWNLOAD_FILE_NAME
    }
}

/// At most one stored result, replaced by each successful upload.
#[derive(Debug)]
pub struct ResultStore<H> {
    current: Option<StoredResult<H>>,
}

impl<H> Default for ResultStore<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> ResultStore<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the handle of a new result, releasing the previous one.
    pub fn store(&mut self, size: usize, handle: H) {
        log::debug!("Storing processed result ({} bytes)", size);
        self.current = Some(StoredResult { size, handle });
    }

    pub fn current(&self) -> Option<&StoredResult<H>> {
        self.current.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::testing::{CountingFactory, MockFile};
    use crate::selection::PreviewFactory;

    #[test]
    fn test_empty_store() {
        let store: ResultStore<()> = ResultStore::new();
        assert!(!store.is_ready());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_store_exposes_download_name() {
        let mut store = ResultStore::new();
        store.store(2, "blob:1");

        let current = store.current().unwrap();
        assert_eq!(current.file_name(), "processed-data.xlsx");
        assert_eq!(current.size(), 2);
        assert_eq!(*current.handle(), "blob:1");
    }

    #[test]
    fn test_replacing_releases_previous_handle() {
        let handles = CountingFactory::default();
        let file = MockFile::xlsx("out.xlsx", 1);
        let mut store = ResultStore::new();

        store.store(1, handles.create(&file).unwrap());
        store.store(2, handles.create(&file).unwrap());

        assert_eq!(handles.released.get(), 1);
        assert_eq!(handles.live(), 1);
        let current = store.current().unwrap();
        assert_eq!(current.size(), 2);
        assert_eq!(current.handle().serial, 1);

        drop(store);
        assert_eq!(handles.live(), 0);
    }
}
