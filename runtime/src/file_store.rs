//! File-backed document storage.
//!
//! One file per document key under a root directory, named `<key>.json`.
//! This is the durable-store analog of the browser storage the storefront
//! historically persisted into: whole documents, rewritten on every
//! mutation, read once at startup.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vitrine_core::storage::{DocumentStore, StorageError};

/// Document store keeping each keyed document in its own file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write, so constructing a store is infallible.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory documents are stored under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl DocumentStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::write(self.path_for(key), contents).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempRoot(PathBuf);

    impl TempRoot {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "vitrine-file-store-{tag}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            Self(root)
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn missing_document_reads_as_none() {
        let root = TempRoot::new("missing");
        let store = FileStore::new(&root.0);
        assert!(store.read("vitrine_products").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let root = TempRoot::new("round-trip");
        let store = FileStore::new(&root.0);
        store.write("vitrine_orders", "[{\"id\":\"A1\"}]").unwrap();
        assert_eq!(
            store.read("vitrine_orders").unwrap(),
            Some("[{\"id\":\"A1\"}]".to_string())
        );
    }

    #[test]
    fn rewrite_replaces_wholesale() {
        let root = TempRoot::new("rewrite");
        let store = FileStore::new(&root.0);
        store.write("doc", "first").unwrap();
        store.write("doc", "second").unwrap();
        assert_eq!(store.read("doc").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn keys_map_to_separate_files() {
        let root = TempRoot::new("separate");
        let store = FileStore::new(&root.0);
        store.write("a", "1").unwrap();
        store.write("b", "2").unwrap();
        assert_eq!(store.read("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.read("b").unwrap(), Some("2".to_string()));
    }
}
