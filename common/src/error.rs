use thiserror::Error;

/// A participant record that cannot be accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email format: {0:?}")]
    InvalidEmail(String),

    #[error("missing value for column `{field}`")]
    MissingField { field: &'static str },

    #[error("participant {0:?} appears more than once")]
    DuplicateEmail(String),
}

/// The search ran out of choices before every participant had a partner.
///
/// This is a definitive answer for the candidate graph that was searched.
/// Retrying with the same graph gives the same result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("failed to create valid assignments due to constraints ({participants} participants)")]
pub struct UnsatisfiableConstraints {
    pub participants: usize,
}
