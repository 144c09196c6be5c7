use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

// Failure reported by a card source while fetching raw bytes.
#[derive(Debug)]
pub enum SourceReadError {
    NotFound,
    Io(std::io::Error),
}

// Port for loading the raw card document.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn read(&self) -> Result<Vec<u8>, SourceReadError>;

    // Where the document lives, for log context only.
    fn location(&self) -> &Path;
}

#[async_trait]
impl<T> CardSource for Arc<T>
where
    T: CardSource + ?Sized,
{
    async fn read(&self) -> Result<Vec<u8>, SourceReadError> {
        (**self).read().await
    }

    fn location(&self) -> &Path {
        (**self).location()
    }
}
