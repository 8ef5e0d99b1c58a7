use bevy::prelude::*;
use thiserror::Error;

/// Validated request to repopulate the scene with a new head count.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationRequest {
    pub people: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopulationInputError {
    #[error("population must be a whole number, got {0:?}")]
    NotANumber(String),
    #[error("population must be at least 1, got {0}")]
    NonPositive(i64),
}

impl PopulationRequest {
    /// Parse raw user input at the boundary. Rejection carries no side
    /// effects; the scene is only mutated by accepted requests.
    pub fn parse(raw: &str) -> Result<Self, PopulationInputError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .replace([',', '_'], "")
            .parse()
            .map_err(|_| PopulationInputError::NotANumber(trimmed.to_string()))?;

        if value <= 0 {
            return Err(PopulationInputError::NonPositive(value));
        }

        Ok(Self {
            people: value as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_separated_numbers() {
        assert_eq!(PopulationRequest::parse("250000"), Ok(PopulationRequest { people: 250_000 }));
        assert_eq!(
            PopulationRequest::parse(" 8,200,000,000 "),
            Ok(PopulationRequest { people: 8_200_000_000 })
        );
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            PopulationRequest::parse("lots"),
            Err(PopulationInputError::NotANumber("lots".to_string()))
        );
    }

    #[test]
    fn rejects_zero_and_negative_counts() {
        assert_eq!(PopulationRequest::parse("0"), Err(PopulationInputError::NonPositive(0)));
        assert_eq!(PopulationRequest::parse("-5"), Err(PopulationInputError::NonPositive(-5)));
    }
}
