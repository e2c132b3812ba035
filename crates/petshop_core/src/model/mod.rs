//! Domain model for pet shop customers.
//!
//! # Responsibility
//! - Define the canonical customer record shared by every layer.
//!
//! # Invariants
//! - A customer is identified by its `name`; there is no surrogate ID.

pub mod customer;
