//! PostgreSQL implementation of OrderReader.

use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, OrderId};
use crate::domain::membership::{OrderStatus, OrderSummary};
use crate::ports::OrderReader;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct PostgresOrderReader {
    pool: PgPool,
}

impl PostgresOrderReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_id: i64,
    total_price: Decimal,
    status: String,
}

impl TryFrom<OrderRow> for OrderSummary {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let invalid = |e: crate::domain::foundation::ValidationError| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid order row {}: {}", row.id, e),
            )
        };

        Ok(OrderSummary {
            id: OrderId::from_raw(row.id),
            customer_id: CustomerId::new(row.customer_id).map_err(invalid)?,
            total_price: row.total_price,
            status: row.status.parse::<OrderStatus>().map_err(invalid)?,
        })
    }
}

#[async_trait]
impl OrderReader for PostgresOrderReader {
    async fn list_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<OrderSummary>, DomainError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, customer_id, total_price, status
            FROM orders
            WHERE customer_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(customer_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(customer_id = %customer_id, error = %e, "order query failed");
            DomainError::database(format!("Failed to list orders: {}", e))
        })?;

        rows.into_iter().map(OrderSummary::try_from).collect()
    }
}
