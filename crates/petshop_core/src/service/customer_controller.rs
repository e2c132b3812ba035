//! Customer use-case controller.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls for create/read/update/delete.
//! - Turn repository outcomes into human-readable status notices.
//!
//! # Invariants
//! - Create validates before touching the repository; a rejected create
//!   leaves storage unchanged.
//! - Update does not validate. A blank email can be written through update.
//! - Not-found is reported as a notice or `None`, never as an error.

use crate::model::customer::Customer;
use crate::repo::customer_repo::{CustomerRepository, RepoError, WriteOutcome};
use crate::validator::{CustomerValidator, InvalidInputError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by controller operations.
#[derive(Debug)]
pub enum ControllerError {
    /// Create input failed validation.
    InvalidInput(InvalidInputError),
    /// Storage backend failure.
    Repo(RepoError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<InvalidInputError> for ControllerError {
    fn from(value: InvalidInputError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Status notice produced by a mutating operation.
///
/// `Display` renders the line shown to operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerNotice {
    Registered(String),
    Updated(String),
    Deleted(String),
    NotFound(String),
}

impl CustomerNotice {
    /// Customer name the notice refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Registered(name)
            | Self::Updated(name)
            | Self::Deleted(name)
            | Self::NotFound(name) => name,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for CustomerNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registered(name) => write!(f, "Customer registered successfully: {name}"),
            Self::Updated(name) => write!(f, "Data updated for {name}"),
            Self::Deleted(name) => write!(f, "Customer {name} deleted"),
            Self::NotFound(_) => write!(f, "Customer not found"),
        }
    }
}

/// Controller over an injected validator and repository.
pub struct CustomerController<R: CustomerRepository> {
    validator: CustomerValidator,
    repo: R,
}

impl<R: CustomerRepository> CustomerController<R> {
    /// Creates a controller from its collaborators.
    pub fn new(validator: CustomerValidator, repo: R) -> Self {
        Self { validator, repo }
    }

    /// Validates and stores a customer, overwriting any record with the same
    /// name.
    ///
    /// # Errors
    /// - `ControllerError::InvalidInput` when `name` or `email` is empty.
    /// - `ControllerError::Repo` when the backend fails.
    pub fn create_customer(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> ControllerResult<CustomerNotice> {
        if let Err(err) = self.validator.validate(name, email) {
            warn!(
                "event=customer_create module=service status=rejected field={}",
                err.field()
            );
            return Err(err.into());
        }

        let customer = Customer::new(name, email, phone);
        self.repo.save(&customer)?;
        Ok(CustomerNotice::Registered(customer.name))
    }

    /// Returns the stored customer, or `None` when unknown.
    pub fn read_customer(&self, name: &str) -> ControllerResult<Option<Customer>> {
        Ok(self.repo.find(name)?)
    }

    /// Replaces email and phone of an existing customer.
    ///
    /// Input is not validated here.
    pub fn update_customer(
        &mut self,
        name: &str,
        new_email: &str,
        new_phone: &str,
    ) -> ControllerResult<CustomerNotice> {
        let customer = Customer::new(name, new_email, new_phone);
        let notice = match self.repo.update(&customer)? {
            WriteOutcome::Applied => CustomerNotice::Updated(customer.name),
            WriteOutcome::NotFound => CustomerNotice::NotFound(customer.name),
        };
        Ok(notice)
    }

    pub fn delete_customer(&mut self, name: &str) -> ControllerResult<CustomerNotice> {
        let notice = match self.repo.delete(name)? {
            WriteOutcome::Applied => CustomerNotice::Deleted(name.to_string()),
            WriteOutcome::NotFound => CustomerNotice::NotFound(name.to_string()),
        };
        Ok(notice)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Consumes the controller and hands back its repository.
    pub fn into_repository(self) -> R {
        self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::CustomerNotice;

    #[test]
    fn notice_lines_match_output_contract() {
        assert_eq!(
            CustomerNotice::Registered("João".to_string()).to_string(),
            "Customer registered successfully: João"
        );
        assert_eq!(
            CustomerNotice::Updated("João".to_string()).to_string(),
            "Data updated for João"
        );
        assert_eq!(
            CustomerNotice::Deleted("João".to_string()).to_string(),
            "Customer João deleted"
        );
        assert_eq!(
            CustomerNotice::NotFound("João".to_string()).to_string(),
            "Customer not found"
        );
    }

    #[test]
    fn notice_exposes_subject_name() {
        let notice = CustomerNotice::NotFound("Ana".to_string());
        assert_eq!(notice.name(), "Ana");
        assert!(notice.is_not_found());
    }
}
