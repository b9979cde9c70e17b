// In-memory repository implementations
//
// Back the service through the same trait seam as the MySQL repositories,
// so API and service tests run without a database. Insertion order is
// preserved and credit code uniqueness is enforced on insert, matching the
// store contract.

use std::sync::Mutex;

use async_trait::async_trait;

use credit_application::core::{AppError, Result};
use credit_application::modules::credits::models::Credit;
use credit_application::modules::credits::repositories::CreditRepository;
use credit_application::modules::customers::models::Customer;
use credit_application::modules::customers::repositories::CustomerRepository;

#[derive(Default)]
pub struct InMemoryCreditRepository {
    credits: Mutex<Vec<Credit>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn save(&self, mut credit: Credit) -> Result<Credit> {
        let mut credits = self.credits.lock().unwrap();

        match credit.id {
            None => {
                if credits.iter().any(|c| c.credit_code == credit.credit_code) {
                    return Err(AppError::internal(format!(
                        "Credit code '{}' already exists",
                        credit.credit_code
                    )));
                }

                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                credit.id = Some(*next_id);
                credits.push(credit.clone());
                Ok(credit)
            }
            Some(id) => {
                match credits.iter_mut().find(|c| c.id == Some(id)) {
                    Some(existing) => *existing = credit.clone(),
                    None => credits.push(credit.clone()),
                }
                Ok(credit)
            }
        }
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let credits = self.credits.lock().unwrap();
        Ok(credits
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_credit_code(&self, credit_code: &str) -> Result<Option<Credit>> {
        let credits = self.credits.lock().unwrap();
        Ok(credits.iter().find(|c| c.credit_code == credit_code).cloned())
    }

    async fn delete_all(&self) -> Result<()> {
        self.credits.lock().unwrap().clear();
        Ok(())
    }
}

impl InMemoryCreditRepository {
    /// Number of stored credits, for asserting that failed operations
    /// leave no partial state behind
    pub fn len(&self) -> usize {
        self.credits.lock().unwrap().len()
    }
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();

        if customer.id.is_none() {
            customer.id = Some(customers.len() as i64 + 1);
        }

        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => customers.push(customer.clone()),
        }

        Ok(customer)
    }

    async fn delete_all(&self) -> Result<()> {
        self.customers.lock().unwrap().clear();
        Ok(())
    }
}
