use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use business::domain::errors::RepositoryError;

/// A whole collection persisted as one JSON array in one file.
///
/// `load_all` and `save_all` move the entire collection. Mutations must hold
/// the guard from [`JsonFileStore::lock`] across their load and save, so two
/// writers on the same collection run one after the other instead of
/// overwriting each other.
pub struct JsonFileStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes read-modify-write sequences on this collection.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Reads the full collection. A missing, empty or unparsable file is an
    /// empty collection; any other read failure is a persistence error.
    pub async fn load_all(&self) -> Result<Vec<T>, RepositoryError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Collection file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Could not read collection file");
                return Err(RepositoryError::Persistence);
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Collection file is corrupt, treating it as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the collection on disk. The JSON is written to a sibling
    /// temporary file and renamed over the target, so readers see either the
    /// old or the new collection.
    pub async fn save_all(&self, records: &[T]) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(records).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Could not serialize collection");
            RepositoryError::Persistence
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!(path = %parent.display(), error = %e, "Could not create data directory");
                RepositoryError::Persistence
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await.map_err(|e| {
            tracing::error!(path = %tmp.display(), error = %e, "Could not write collection file");
            RepositoryError::Persistence
        })?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            tracing::error!(path = %self.path.display(), error = %e, "Could not replace collection file");
            if let Err(e) = fs::remove_file(&tmp).await {
                tracing::warn!(path = %tmp.display(), error = %e, "Could not remove temporary collection file");
            }
            return Err(RepositoryError::Persistence);
        }

        tracing::debug!(path = %self.path.display(), records = records.len(), "Collection saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: i64,
        name: String,
    }

    #[tokio::test]
    async fn should_load_empty_collection_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Record>::new(dir.path().join("missing.json"));

        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_load_empty_collection_when_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, b"[{\"id\": 1,").unwrap();
        let store = JsonFileStore::<Record>::new(&path);

        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_persist_whole_collection_and_create_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.json");
        let store = JsonFileStore::<Record>::new(&path);
        let records = vec![
            Record {
                id: 1,
                name: "first".to_string(),
            },
            Record {
                id: 2,
                name: "second".to_string(),
            },
        ];

        store.save_all(&records).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), records);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn should_overwrite_previous_contents_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Record>::new(dir.path().join("records.json"));
        store
            .save_all(&[Record {
                id: 1,
                name: "old".to_string(),
            }])
            .await
            .unwrap();

        store.save_all(&[]).await.unwrap();

        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_fail_and_clean_temp_file_when_target_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is an existing directory, so the rename cannot succeed.
        let path = dir.path().join("taken.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();
        let store = JsonFileStore::<Record>::new(&path);

        let result = store.save_all(&[]).await;

        assert!(matches!(result, Err(RepositoryError::Persistence)));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
