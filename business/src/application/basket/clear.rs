use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::clear::{ClearBasketParams, ClearBasketUseCase};
use crate::domain::logger::Logger;

pub struct ClearBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearBasketUseCase for ClearBasketUseCaseImpl {
    async fn execute(&self, params: ClearBasketParams) -> Result<(), BasketError> {
        self.logger
            .info(&format!("Clearing basket of user: {}", params.user_id));

        if let Some(mut basket) = self.repository.find_by_user_id(&params.user_id).await? {
            basket.clear();
            self.repository.save(&basket).await?;
        }
        Ok(())
    }
}
