//! Customer input validation.
//!
//! # Responsibility
//! - Reject create requests with missing required fields.
//!
//! # Invariants
//! - Only emptiness is checked; no trimming and no email-shape rules.
//! - `name` is checked before `email`, so the first missing field is reported.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The single domain error kind: a required customer field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
    EmptyName,
    EmptyEmail,
}

impl InvalidInputError {
    /// Name of the offending field, as used in log events and messages.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
        }
    }
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid customer data: {} is empty", self.field())
    }
}

impl Error for InvalidInputError {}

/// Stateless validator for customer create input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerValidator;

impl CustomerValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks that both required fields are non-empty.
    ///
    /// # Errors
    /// - `InvalidInputError::EmptyName` when `name` is empty.
    /// - `InvalidInputError::EmptyEmail` when `email` is empty.
    pub fn validate(&self, name: &str, email: &str) -> Result<(), InvalidInputError> {
        if name.is_empty() {
            Err(InvalidInputError::EmptyName)
        } else if email.is_empty() {
            Err(InvalidInputError::EmptyEmail)
        } else {
            Ok(())
        }
    }
}
