use crate::domain::entities::CardCollection;
use crate::domain::errors::CardError;
use crate::domain::ports::{CardSource, SourceReadError};

// Get-cards use case: read the source fresh and parse it as JSON.
pub struct GetCardsUseCase<S> {
    pub source: S,
}

impl<S> GetCardsUseCase<S>
where
    S: CardSource,
{
    pub async fn execute(&self) -> Result<CardCollection, CardError> {
        let bytes = self.source.read().await.map_err(|err| match err {
            SourceReadError::NotFound => CardError::SourceMissing,
            SourceReadError::Io(err) => CardError::SourceUnreadable(err),
        })?;

        // Validation only: numbers and escapes keep their original spelling.
        // Invalid UTF-8 surfaces here as a JSON syntax error.
        let document = serde_json::from_slice(&bytes).map_err(CardError::SourceInvalid)?;

        Ok(CardCollection(document))
    }
}
