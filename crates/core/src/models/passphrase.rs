use crate::prelude::*;

/// Wallet passphrase. Never printed, not even in debug output.
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
#[debug("Passphrase(<redacted>)")]
pub struct Passphrase(String);

impl Passphrase {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyPassphrase);
        }
        Ok(Self(raw))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak() {
        let passphrase = Passphrase::new("hunter2").unwrap();
        assert_eq!(format!("{passphrase:?}"), "Passphrase(<redacted>)");
    }
}
