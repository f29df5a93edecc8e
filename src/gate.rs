//! Shared-password access gate.

use std::fmt;

use thiserror::Error;

/// The shared secret every user must present.
///
/// Loaded once at startup and never mutated. `Debug` is redacted so the value
/// cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty secret, which no user could ever match.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Result of checking a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Nothing entered yet.
    Empty,
    Invalid,
    Valid,
}

pub fn check(credential: &Credential, candidate: &str) -> GateOutcome {
    if candidate.is_empty() {
        GateOutcome::Empty
    } else if credential.matches(candidate) {
        GateOutcome::Valid
    } else {
        GateOutcome::Invalid
    }
}

/// Reasons an interaction is halted before reaching the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Please enter your password to access the program.")]
    EmptyCredential,

    #[error("Incorrect password. Try again.")]
    InvalidCredential,

    #[error("You must accept the disclaimer before using the tool.")]
    DisclaimerNotAccepted,
}

impl AccessError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyCredential => "empty_credential",
            Self::InvalidCredential => "invalid_credential",
            Self::DisclaimerNotAccepted => "disclaimer_not_accepted",
        }
    }
}

/// Require a valid password, converting the other outcomes into errors.
pub fn require(credential: &Credential, candidate: &str) -> Result<(), AccessError> {
    match check(credential, candidate) {
        GateOutcome::Valid => Ok(()),
        GateOutcome::Empty => Err(AccessError::EmptyCredential),
        GateOutcome::Invalid => Err(AccessError::InvalidCredential),
    }
}
