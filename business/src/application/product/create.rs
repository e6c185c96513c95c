use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.props.name));

        let product = Product::new(params.props)?;
        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductProps;
    use crate::test_support::{MockProductRepo, mock_logger, price};

    fn props(name: &str, unit_price: &str) -> ProductProps {
        ProductProps {
            name: name.to_string(),
            description: "Comfortable cotton t-shirt".to_string(),
            price: price(unit_price),
            image_url: Some("https://example.com/images/white-tshirt.jpg".to_string()),
            stock: 50,
            category: "T-Shirts".to_string(),
            size: "M".to_string(),
            color: "White".to_string(),
            material: "Cotton".to_string(),
            gender: "Unisex".to_string(),
            brand: "BasicWear".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_product_when_fields_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(CreateProductParams {
                props: props("Classic White T-Shirt", "19.99"),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Classic White T-Shirt");
        assert_eq!(product.price, price("19.99"));
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                props: props("  ", "19.99"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_reject_product_when_price_negative() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                props: props("Tee", "-0.01"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NegativePrice)));
    }
}
