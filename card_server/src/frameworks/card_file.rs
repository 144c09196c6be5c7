use crate::domain::ports::{CardSource, SourceReadError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// Card source backed by a JSON file on local disk, read fresh on every call.
pub struct FileCardSource {
    path: PathBuf,
}

impl FileCardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CardSource for FileCardSource {
    async fn read(&self) -> Result<Vec<u8>, SourceReadError> {
        tokio::fs::read(&self.path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => SourceReadError::NotFound,
            _ => SourceReadError::Io(err),
        })
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
