//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract the controller depends on.
//! - Provide an in-memory backend and a SQLite-backed durable backend.
//!
//! # Invariants
//! - Absence of a customer is a value (`None` / `WriteOutcome::NotFound`),
//!   never a `RepoError`.
//! - Implementations are interchangeable behind `CustomerRepository`.

pub mod customer_repo;
pub mod memory_repo;
