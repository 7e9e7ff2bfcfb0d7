//! Storage for uploaded item images.
//!
//! [`LocalFileStore`] keeps files under a single directory keyed by the
//! client-supplied filename. Names are NOT sanitized: a name such as
//! `../x` escapes the uploads directory. Hardened naming belongs in a
//! separate [`FileStore`] implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{AppError, AppResult};

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write `bytes` under `filename`, replacing any existing file.
    async fn save(&self, filename: &str, bytes: &[u8]) -> AppResult<PathBuf>;

    /// Read back a previously saved file.
    async fn load(&self, filename: &str) -> AppResult<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, filename: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes).await?;

        debug!(path = %path.display(), size = bytes.len(), "Stored upload");
        Ok(path)
    }

    async fn load(&self, filename: &str) -> AppResult<Vec<u8>> {
        let path = self.path_for(filename);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::NotFound("File not found".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
