use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MAX_EMAIL_LENGTH: usize = 320;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParticipantEmailError {
    #[error("email must not be empty")]
    Empty,

    #[error("email must be at most 320 characters")]
    TooLong,

    #[error("email must not contain control characters")]
    ContainsControlCharacter,

    #[error("email must look like local@domain")]
    Malformed,
}

/// A participant's email address, validated at the request boundary.
///
/// Any non-blank `local@domain` without control characters is accepted,
/// including unicode and inner spaces (an unencoded `+` in a query string
/// arrives as a space). Matching is exact: `Ann@school.edu` and
/// `ann@school.edu` are different participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn parse(raw: &str) -> Result<Self, ParticipantEmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParticipantEmailError::Empty);
        }
        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(ParticipantEmailError::TooLong);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(ParticipantEmailError::ContainsControlCharacter);
        }
        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ParticipantEmailError::Malformed),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
