//! # Participant Model
//!
//! A participant is identified by their email address. The display name is
//! carried along for output only and never takes part in comparisons.
//!
//! Accepted addresses have the shape `local@label.rest`:
//! * `local`: one or more of `A-Z a-z 0-9 _ . + -`
//! * `label`: one or more of `A-Z a-z 0-9 -`
//! * `rest`: one or more of `A-Z a-z 0-9 - .`

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;

#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    email: String,
}

impl Participant {
    /// Creates a participant after checking the shape of `email`.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let email: String = email.into();
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self {
            name: name.into(),
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unique key of this participant.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl PartialOrd for Participant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Participant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.email.cmp(&other.email)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Checks `email` against the accepted `local@label.rest` shape.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let Some((label, rest)) = domain.split_once('.') else {
        return false;
    };

    is_run_of(local, |c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
        && is_run_of(label, |c| c.is_ascii_alphanumeric() || c == '-')
        && is_run_of(rest, |c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
}

/// Non-empty and every character accepted by `allowed`.
fn is_run_of(part: &str, allowed: impl Fn(char) -> bool) -> bool {
    !part.is_empty() && part.chars().all(allowed)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
