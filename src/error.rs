use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed pattern at {offset}: {reason}")]
    MalformedPattern { offset: usize, reason: String },

    #[error("length mismatch: pattern has {expected} positions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("pattern expands to more than {limit} positions")]
    TooManyPositions { limit: usize },

    #[error("combination count does not fit in 128 bits")]
    CountOverflow,
}

impl Error {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedPattern {
            offset,
            reason: reason.into(),
        }
    }
}
