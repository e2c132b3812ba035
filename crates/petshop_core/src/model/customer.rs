//! Customer domain model.
//!
//! # Responsibility
//! - Define the record persisted by customer repositories.
//!
//! # Invariants
//! - `name` is the sole identity key; at most one record exists per name.
//! - `email` uniqueness is not enforced.
//! - `phone` is free-form and never checked.

use serde::{Deserialize, Serialize};

/// Canonical customer record.
///
/// Construction does not validate; create paths go through
/// [`crate::validator::CustomerValidator`] before a record reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Identity key used by every repository operation.
    pub name: String,
    pub email: String,
    /// Unchecked; may be empty.
    pub phone: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
