use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::product::repository::ProductRepository;

/// Current catalog name of a product, `None` once it has been deleted.
pub(crate) async fn current_product_name(
    repository: &dyn ProductRepository,
    product_id: Uuid,
) -> Result<Option<String>, RepositoryError> {
    match repository.get_by_id(product_id).await {
        Ok(product) => Ok(Some(product.name)),
        Err(RepositoryError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
