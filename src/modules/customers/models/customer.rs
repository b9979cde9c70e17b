use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A credit-holding party, referenced by the credits module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Numeric identifier, assigned by the store on first insert
    pub id: Option<i64>,

    pub email: String,

    /// Declared monthly income; projections default this to zero when unset
    pub income: Option<Decimal>,
}

impl Customer {
    pub fn new(id: Option<i64>, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            income: None,
        }
    }

    pub fn with_income(mut self, income: Decimal) -> Self {
        self.income = Some(income);
        self
    }

    /// Income as exposed by credit projections
    pub fn income_or_zero(&self) -> Decimal {
        self.income.unwrap_or(Decimal::ZERO)
    }
}
