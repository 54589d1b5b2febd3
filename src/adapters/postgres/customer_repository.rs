//! PostgreSQL implementation of CustomerRepository.

use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, Timestamp};
use crate::domain::membership::{CustomerMembership, TierCode};
use crate::ports::{CustomerRepository, TierSyncOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL implementation of the CustomerRepository port.
///
/// Tier sync is a single conditional UPDATE, so concurrent syncs for the same
/// customer cannot interleave a read and a write.
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// Creates a new PostgresCustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &CustomerId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("check customer", e))
    }
}

/// Database row representation of a customer's membership fields.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    cumulative_spend: Decimal,
    tier_code: String,
    points_balance: i64,
    registered_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for CustomerMembership {
    type Error = DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let corrupt = |e: crate::domain::foundation::ValidationError| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid customer row {}: {}", row.id, e),
            )
        };

        let id = CustomerId::new(row.id).map_err(corrupt)?;
        let tier_code = TierCode::new(&row.tier_code).map_err(corrupt)?;

        CustomerMembership::new(
            id,
            row.cumulative_spend,
            tier_code,
            row.points_balance,
            Timestamp::from_datetime(row.registered_at),
        )
        .map_err(corrupt)
    }
}

fn db_error(operation: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %e, "customer query failed");
    DomainError::database(format!("Failed to {}: {}", operation, e))
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_membership(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerMembership>, DomainError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, cumulative_spend, tier_code, points_balance, registered_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("find customer", e))?;

        row.map(CustomerMembership::try_from).transpose()
    }

    async fn update_cumulative_spend(
        &self,
        id: &CustomerId,
        spend: Decimal,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE customers SET
                cumulative_spend = $2,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .bind(spend)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update cumulative spend", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn sync_tier(
        &self,
        id: &CustomerId,
        code: &TierCode,
    ) -> Result<TierSyncOutcome, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE customers SET
                tier_code = $2,
                updated_at = NOW()
            WHERE id = $1 AND tier_code <> $2
            "#,
        )
        .bind(id.value())
        .bind(code.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("sync tier", e))?;

        if result.rows_affected() > 0 {
            return Ok(TierSyncOutcome::Updated);
        }

        if self.exists(id).await? {
            Ok(TierSyncOutcome::Unchanged)
        } else {
            Ok(TierSyncOutcome::CustomerNotFound)
        }
    }
}
