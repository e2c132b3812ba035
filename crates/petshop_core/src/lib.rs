//! Core domain logic for the pet shop customer registry.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validator;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::Customer;
pub use repo::customer_repo::{
    CustomerRepository, RepoError, RepoResult, SqliteCustomerRepository, WriteOutcome,
};
pub use repo::memory_repo::InMemoryCustomerRepository;
pub use service::customer_controller::{
    ControllerError, ControllerResult, CustomerController, CustomerNotice,
};
pub use validator::{CustomerValidator, InvalidInputError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
