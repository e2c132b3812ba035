//! In-memory customer repository.
//!
//! # Responsibility
//! - Hold customers in a process-local map for demos and tests.
//!
//! # Invariants
//! - The map key always equals the stored record's `name`.
//! - Operations never fail; `RepoResult` is kept for contract parity.

use crate::model::customer::Customer;
use crate::repo::customer_repo::{
    log_write_outcome, CustomerRepository, RepoResult, WriteOutcome,
};
use log::info;
use std::collections::HashMap;

const BACKEND: &str = "memory";

/// Map-backed repository that owns every stored record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: HashMap<String, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn save(&mut self, customer: &Customer) -> RepoResult<()> {
        let replaced = self
            .customers
            .insert(customer.name.clone(), customer.clone())
            .is_some();

        info!(
            "event=customer_save module=repo backend={} status=ok replaced={}",
            BACKEND, replaced
        );
        Ok(())
    }

    fn find(&self, name: &str) -> RepoResult<Option<Customer>> {
        Ok(self.customers.get(name).cloned())
    }

    fn update(&mut self, customer: &Customer) -> RepoResult<WriteOutcome> {
        let outcome = match self.customers.get_mut(&customer.name) {
            Some(stored) => {
                *stored = customer.clone();
                WriteOutcome::Applied
            }
            None => WriteOutcome::NotFound,
        };

        log_write_outcome("customer_update", BACKEND, outcome);
        Ok(outcome)
    }

    fn delete(&mut self, name: &str) -> RepoResult<WriteOutcome> {
        let outcome = if self.customers.remove(name).is_some() {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        };

        log_write_outcome("customer_delete", BACKEND, outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryCustomerRepository;
    use crate::model::customer::Customer;
    use crate::repo::customer_repo::{CustomerRepository, WriteOutcome};

    #[test]
    fn save_overwrites_existing_key() {
        let mut repo = InMemoryCustomerRepository::new();
        repo.save(&Customer::new("A", "a@x", "1")).unwrap();
        repo.save(&Customer::new("A", "a@x", "2")).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("A").unwrap().unwrap().phone, "2");
    }

    #[test]
    fn update_never_inserts() {
        let mut repo = InMemoryCustomerRepository::new();
        let outcome = repo.update(&Customer::new("ghost", "g@x", "")).unwrap();

        assert_eq!(outcome, WriteOutcome::NotFound);
        assert!(repo.is_empty());
    }

    #[test]
    fn delete_reports_missing_name() {
        let mut repo = InMemoryCustomerRepository::new();
        repo.save(&Customer::new("A", "a@x", "")).unwrap();

        assert_eq!(repo.delete("B").unwrap(), WriteOutcome::NotFound);
        assert_eq!(repo.delete("A").unwrap(), WriteOutcome::Applied);
        assert_eq!(repo.find("A").unwrap(), None);
    }
}
