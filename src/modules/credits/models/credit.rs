// Credit model with validation
//
// A credit is a loan record owned by a customer: a value, an installment
// plan, and a status. The creation request can never choose the status;
// every new credit starts in IN_PROGRESS.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;

/// Credit status lifecycle
///
/// Only the creation-time transition into `InProgress` is implemented;
/// approval and rejection have no transition API in this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Credit created, pending analysis
    InProgress,

    /// Credit approved
    Approved,

    /// Credit rejected
    Rejected,
}

impl Default for CreditStatus {
    fn default() -> Self {
        CreditStatus::InProgress
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::InProgress => write!(f, "IN_PROGRESS"),
            CreditStatus::Approved => write!(f, "APPROVED"),
            CreditStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(CreditStatus::InProgress),
            "APPROVED" => Ok(CreditStatus::Approved),
            "REJECTED" => Ok(CreditStatus::Rejected),
            _ => Err(format!("Invalid credit status: {}", s)),
        }
    }
}

/// Represents a credit (loan) record
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Credit {
    /// Numeric identifier, assigned by the store on first insert
    pub id: Option<i64>,

    /// External-facing unique token, generated at construction time
    pub credit_code: String,

    /// Requested loan amount
    pub credit_value: Decimal,

    /// Date the first installment falls due
    pub day_first_installment: NaiveDate,

    pub number_of_installments: i32,

    pub status: CreditStatus,

    /// Owning customer, a foreign association by id
    pub customer_id: i64,
}

impl Credit {
    /// Build a validated credit from creation-request fields.
    ///
    /// Assigns a fresh UUID credit code and forces the status to
    /// `InProgress`. Validation happens before any store interaction:
    /// the value must be non-negative, the installment count positive,
    /// and the first-installment date not in the past.
    pub fn new(
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: i32,
        customer_id: i64,
    ) -> Result<Self> {
        Self::validate_credit_value(credit_value)?;
        Self::validate_number_of_installments(number_of_installments)?;
        Self::validate_day_first_installment(day_first_installment)?;

        Ok(Self {
            id: None,
            credit_code: Uuid::new_v4().to_string(),
            credit_value,
            day_first_installment,
            number_of_installments,
            status: CreditStatus::InProgress,
            customer_id,
        })
    }

    fn validate_credit_value(credit_value: Decimal) -> Result<()> {
        if credit_value < Decimal::ZERO {
            return Err(AppError::validation("Credit value must be non-negative"));
        }

        Ok(())
    }

    fn validate_number_of_installments(number_of_installments: i32) -> Result<()> {
        if number_of_installments <= 0 {
            return Err(AppError::validation(
                "Number of installments must be greater than 0",
            ));
        }

        Ok(())
    }

    fn validate_day_first_installment(day_first_installment: NaiveDate) -> Result<()> {
        if day_first_installment < Utc::now().date_naive() {
            return Err(AppError::validation(
                "Day of first installment must not be in the past",
            ));
        }

        Ok(())
    }
}

/// Creation request body for POST /api/credits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditRequest {
    pub credit_value: Decimal,
    pub day_first_of_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: i64,
}

/// Denormalized creation/lookup response joining credit and customer fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditResponse {
    pub credit_code: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub credit_value: Decimal,

    /// Singular wire key; the list projection uses the plural form
    pub number_of_installment: i32,

    pub status: CreditStatus,

    pub email_customer: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub income_customer: Decimal,
}

impl CreditResponse {
    pub fn from_credit(credit: &Credit, customer: &Customer) -> Self {
        Self {
            credit_code: credit.credit_code.clone(),
            credit_value: credit.credit_value,
            number_of_installment: credit.number_of_installments,
            status: credit.status,
            email_customer: customer.email.clone(),
            income_customer: customer.income_or_zero(),
        }
    }
}

/// List entry for GET /api/credits?customerId=
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditListItem {
    pub credit_code: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub credit_value: Decimal,

    pub number_of_installments: i32,

    pub status: CreditStatus,
}

impl From<&Credit> for CreditListItem {
    fn from(credit: &Credit) -> Self {
        Self {
            credit_code: credit.credit_code.clone(),
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
        }
    }
}
