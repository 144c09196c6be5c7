use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{CardSource, SourceReadError};

// What the fake source hands back on every read.
pub(crate) enum FakeContents {
    Bytes(Vec<u8>),
    Missing,
    Unreadable,
}

// In-memory card source for deterministic use-case and route tests.
pub(crate) struct FakeSource {
    contents: FakeContents,
    reads: AtomicUsize,
}

impl FakeSource {
    pub(crate) fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(FakeContents::Bytes(bytes.into()))
    }

    pub(crate) fn missing() -> Self {
        Self::new(FakeContents::Missing)
    }

    pub(crate) fn unreadable() -> Self {
        Self::new(FakeContents::Unreadable)
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn new(contents: FakeContents) -> Self {
        Self {
            contents,
            reads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CardSource for FakeSource {
    async fn read(&self) -> Result<Vec<u8>, SourceReadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.contents {
            FakeContents::Bytes(bytes) => Ok(bytes.clone()),
            FakeContents::Missing => Err(SourceReadError::NotFound),
            FakeContents::Unreadable => Err(SourceReadError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ))),
        }
    }

    fn location(&self) -> &Path {
        Path::new("memory://filtered_cards.json")
    }
}
