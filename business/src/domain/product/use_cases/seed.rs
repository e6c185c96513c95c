use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait SeedCatalogUseCase: Send + Sync {
    /// Returns how many products were inserted; zero when the catalog already had products.
    async fn execute(&self) -> Result<usize, ProductError>;
}
