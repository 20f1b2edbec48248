use crate::prelude::*;

/// Per-recipient transfer amount, in uPOKT.
///
/// Kept as the exact text the user entered. Validation only guarantees it
/// reads as a positive number; no unit conversion is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct Amount(String);

impl Amount {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let Ok(value) = trimmed.parse::<f64>() else {
            return Err(ValidationError::AmountNotANumber {
                bad_value: raw.to_owned(),
            });
        };
        if !value.is_finite() {
            return Err(ValidationError::AmountNotANumber {
                bad_value: raw.to_owned(),
            });
        }
        if value <= 0.0 {
            return Err(ValidationError::AmountNotPositive {
                bad_value: raw.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_text_verbatim() {
        assert_eq!(Amount::parse(" 100.25 ").unwrap().as_str(), "100.25");
        assert_eq!(Amount::parse("1000000").unwrap().to_string(), "1000000");
    }

    #[test]
    fn infinity_is_not_an_amount() {
        assert_eq!(
            Amount::parse("inf"),
            Err(ValidationError::AmountNotANumber {
                bad_value: "inf".to_owned()
            })
        );
    }
}
