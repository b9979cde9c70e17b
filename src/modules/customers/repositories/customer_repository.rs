use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::customers::models::Customer;

/// Customer lookup used by the credit service to resolve the owning
/// customer at creation time. `save` and `delete_all` exist for fixture
/// seeding and administrative cleanup, not for a customer-facing API.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    async fn save(&self, customer: Customer) -> Result<Customer>;

    async fn delete_all(&self) -> Result<()>;
}

/// MySQL-backed customer repository
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, email, income
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn save(&self, customer: Customer) -> Result<Customer> {
        match customer.id {
            Some(id) => {
                // Fixture-style save with a caller-chosen id; upsert so
                // repeated seeding stays idempotent.
                sqlx::query(
                    r#"
                    INSERT INTO customers (id, email, income)
                    VALUES (?, ?, ?)
                    ON DUPLICATE KEY UPDATE email = VALUES(email), income = VALUES(income)
                    "#,
                )
                .bind(id)
                .bind(&customer.email)
                .bind(customer.income)
                .execute(&self.pool)
                .await?;

                Ok(customer)
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO customers (email, income)
                    VALUES (?, ?)
                    "#,
                )
                .bind(&customer.email)
                .bind(customer.income)
                .execute(&self.pool)
                .await?;

                let mut saved = customer;
                saved.id = Some(result.last_insert_id() as i64);
                Ok(saved)
            }
        }
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM customers")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
