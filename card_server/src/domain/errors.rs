// Domain-level errors for card retrieval.
#[derive(Debug)]
pub enum CardError {
    SourceMissing,
    SourceInvalid(serde_json::Error),
    SourceUnreadable(std::io::Error),
}

