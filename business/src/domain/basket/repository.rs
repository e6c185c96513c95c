use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Basket;

#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Basket>, RepositoryError>;
    /// Writes the whole document; the last writer wins.
    async fn save(&self, basket: &Basket) -> Result<(), RepositoryError>;
}
