//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case level APIs.
//! - Stay storage-agnostic; backends are injected.

pub mod customer_controller;
