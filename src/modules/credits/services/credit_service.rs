use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{
    CreateCreditRequest, Credit, CreditListItem, CreditResponse,
};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::models::Customer;
use crate::modules::customers::repositories::CustomerRepository;

/// Service for credit business logic
///
/// Holds explicit constructor-passed collaborators: the credit store and
/// the customer lookup. No ambient container.
pub struct CreditService {
    credit_repo: Arc<dyn CreditRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CreditService {
    pub fn new(
        credit_repo: Arc<dyn CreditRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            credit_repo,
            customer_repo,
        }
    }

    /// Create a credit from a validated request.
    ///
    /// Validation runs before any store interaction; a missing customer
    /// fails the whole operation with no partial state. The stored credit
    /// comes back with its assigned id, and the response is the
    /// denormalized projection joining credit and customer fields.
    pub async fn save(&self, request: CreateCreditRequest) -> Result<CreditResponse> {
        let credit = Credit::new(
            request.credit_value,
            request.day_first_of_installment,
            request.number_of_installments,
            request.customer_id,
        )?;

        let customer = self.resolve_customer(request.customer_id).await?;

        let saved = self.credit_repo.save(credit).await?;

        tracing::info!(
            credit_code = %saved.credit_code,
            customer_id = saved.customer_id,
            "Credit created"
        );

        Ok(CreditResponse::from_credit(&saved, &customer))
    }

    /// Every credit owned by the given customer id, in creation order.
    ///
    /// Purely a query against stored credit records; the customer does not
    /// have to exist, and a customer with no credits yields an empty list.
    pub async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<CreditListItem>> {
        let credits = self.credit_repo.find_all_by_customer_id(customer_id).await?;

        Ok(credits.iter().map(CreditListItem::from).collect())
    }

    /// Single-credit lookup by its generated code, scoped to a customer
    pub async fn find_by_credit_code(
        &self,
        customer_id: i64,
        credit_code: &str,
    ) -> Result<CreditResponse> {
        let credit = self
            .credit_repo
            .find_by_credit_code(credit_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Credit code {} not found", credit_code))
            })?;

        if credit.customer_id != customer_id {
            return Err(AppError::validation(
                "Credit does not belong to the given customer",
            ));
        }

        let customer = self.resolve_customer(credit.customer_id).await?;

        Ok(CreditResponse::from_credit(&credit, &customer))
    }

    async fn resolve_customer(&self, customer_id: i64) -> Result<Customer> {
        self.customer_repo
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer id {} not found", customer_id)))
    }
}
