use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::{PageRequest, UserId};

use super::entity::OrderEntity;
use crate::errors::{map_read_error, map_write_error};

const ORDER_COLUMNS: &str = "id, user_id, items, total_amount, status, shipping_address, payment_method, created_at, updated_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<Vec<Order>, RepositoryError> {
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(user_id.as_uuid())
        .bind(i64::from(page.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        entities.into_iter().map(OrderEntity::into_domain).collect()
    }

    async fn count_by_user_id(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(count.max(0) as u64)
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO orders (id, user_id, items, total_amount, status, shipping_address, payment_method, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_uuid())
        .bind(OrderEntity::items_document(order))
        .bind(&order.total_amount)
        .bind(order.status.to_string())
        .bind(Json(&order.shipping_address))
        .bind(order.payment_method.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
