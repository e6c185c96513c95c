use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductFilter;

use super::entity::ProductEntity;
use crate::errors::{map_read_error, map_write_error};

const PRODUCT_COLUMNS: &str = "id, name, description, price, image_url, stock, category, size, color, material, gender, brand, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        // NULL limit/offset mean "no paging" to PostgreSQL.
        let limit = filter.page.map(|p| i64::from(p.limit()));
        let offset = filter
            .page
            .map(|p| i64::try_from(p.offset()).unwrap_or(i64::MAX));

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE ($1::TEXT IS NULL OR category = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(filter.category.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        entities.into_iter().map(ProductEntity::into_domain).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let stock = i32::try_from(product.stock).map_err(|_| RepositoryError::CorruptedDocument)?;
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, image_url, stock, category, size, color, material, gender, brand, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                image_url = EXCLUDED.image_url,
                stock = EXCLUDED.stock,
                category = EXCLUDED.category,
                size = EXCLUDED.size,
                color = EXCLUDED.color,
                material = EXCLUDED.material,
                gender = EXCLUDED.gender,
                brand = EXCLUDED.brand,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.image_url)
        .bind(stock)
        .bind(&product.category)
        .bind(&product.size)
        .bind(&product.color)
        .bind(&product.material)
        .bind(&product.gender)
        .bind(&product.brand)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(count.max(0) as u64)
    }
}
