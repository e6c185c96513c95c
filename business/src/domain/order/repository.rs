use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{PageRequest, UserId};

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    /// Newest first, `page.limit()` orders starting at `page.offset()`.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn count_by_user_id(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
}
