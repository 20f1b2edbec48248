/// An address read from the recipients file, exactly as written there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct RecipientAddress(String);

impl RecipientAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The form used as transfer target.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}
