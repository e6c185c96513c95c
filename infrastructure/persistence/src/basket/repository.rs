use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::basket::model::Basket;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::BasketEntity;
use crate::errors::{map_read_error, map_write_error};

/// One basket per user: a concurrent first save for the same user updates
/// the existing row instead of tripping the user_id unique constraint.
const UPSERT_BASKET: &str = r#"INSERT INTO baskets (id, user_id, items, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (user_id) DO UPDATE SET
    items = EXCLUDED.items,
    updated_at = EXCLUDED.updated_at"#;

pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Basket>, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketEntity>(
            "SELECT id, user_id, items, created_at, updated_at FROM baskets WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entity.map(BasketEntity::into_domain))
    }

    async fn save(&self, basket: &Basket) -> Result<(), RepositoryError> {
        sqlx::query(UPSERT_BASKET)
        .bind(basket.id)
        .bind(basket.user_id.as_uuid())
        .bind(BasketEntity::items_document(basket))
        .bind(basket.created_at)
        .bind(basket.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
