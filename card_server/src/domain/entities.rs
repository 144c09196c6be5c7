use serde_json::value::RawValue;

// Card payload exactly as stored in the source file. Checked for well-formedness, never re-encoded.
#[derive(Debug)]
pub struct CardCollection(pub Box<RawValue>);

impl CardCollection {
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub fn into_inner(self) -> Box<RawValue> {
        self.0
    }
}
