use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Newest first.
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no product had that id.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
