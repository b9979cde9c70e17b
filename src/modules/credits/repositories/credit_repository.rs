// CreditRepository trait and its MySQL implementation
//
// Durable keyed storage for credit records: insert-or-update by id,
// equality filter on the owning customer id, exact lookup by credit code.
// Credit code uniqueness is enforced here (unique index), not by callers.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::credits::models::Credit;

#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Insert or update a credit. Assigns the numeric id on first insert
    /// and returns the stored value. Atomic per record: a credit is either
    /// fully persisted with its id and code, or not persisted at all.
    async fn save(&self, credit: Credit) -> Result<Credit>;

    /// Every credit owned by the given customer id, in creation (id) order.
    /// Empty when the customer has no credits; the customer itself does not
    /// have to exist.
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>>;

    /// Exact-match lookup by the generated credit code
    async fn find_by_credit_code(&self, credit_code: &str) -> Result<Option<Credit>>;

    /// Administrative bulk-clear, test-fixture hygiene only
    async fn delete_all(&self) -> Result<()>;
}

/// MySQL-backed credit repository
pub struct MySqlCreditRepository {
    pool: MySqlPool,
}

impl MySqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditRepository for MySqlCreditRepository {
    async fn save(&self, credit: Credit) -> Result<Credit> {
        match credit.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO credits (
                        credit_code, credit_value, day_first_installment,
                        number_of_installments, status, customer_id
                    ) VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&credit.credit_code)
                .bind(credit.credit_value)
                .bind(credit.day_first_installment)
                .bind(credit.number_of_installments)
                .bind(credit.status.to_string())
                .bind(credit.customer_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    if let Some(db_err) = e.as_database_error() {
                        if db_err.is_unique_violation() {
                            // Code generation is collision-resistant; a hit
                            // here is an internal failure, not caller input.
                            return AppError::internal(format!(
                                "Credit code '{}' already exists",
                                credit.credit_code
                            ));
                        }
                    }
                    AppError::Database(e)
                })?;

                let mut saved = credit;
                saved.id = Some(result.last_insert_id() as i64);
                Ok(saved)
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE credits
                    SET credit_value = ?, day_first_installment = ?,
                        number_of_installments = ?, status = ?, customer_id = ?
                    WHERE id = ?
                    "#,
                )
                .bind(credit.credit_value)
                .bind(credit.day_first_installment)
                .bind(credit.number_of_installments)
                .bind(credit.status.to_string())
                .bind(credit.customer_id)
                .bind(id)
                .execute(&self.pool)
                .await?;

                Ok(credit)
            }
        }
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let credits = sqlx::query_as::<_, Credit>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id
            FROM credits
            WHERE customer_id = ?
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(credits)
    }

    async fn find_by_credit_code(&self, credit_code: &str) -> Result<Option<Credit>> {
        let credit = sqlx::query_as::<_, Credit>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id
            FROM credits
            WHERE credit_code = ?
            "#,
        )
        .bind(credit_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credit)
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM credits")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
