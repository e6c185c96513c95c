use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductProps};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub stock: i32,
    pub category: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub gender: String,
    pub brand: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let stock = u32::try_from(self.stock).map_err(|_| RepositoryError::CorruptedDocument)?;
        Ok(Product::from_repository(
            self.id,
            ProductProps {
                name: self.name,
                description: self.description,
                price: self.price,
                image_url: self.image_url,
                stock,
                category: self.category,
                size: self.size,
                color: self.color,
                material: self.material,
                gender: self.gender,
                brand: self.brand,
            },
            self.created_at,
            self.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(stock: i32) -> ProductEntity {
        let now = Utc::now();
        ProductEntity {
            id: Uuid::new_v4(),
            name: "Gray Hoodie".to_string(),
            description: "Comfortable hoodie".to_string(),
            price: BigDecimal::new(3999.into(), 2),
            image_url: None,
            stock,
            category: "Hoodies".to_string(),
            size: "XL".to_string(),
            color: "Gray".to_string(),
            material: "Cotton".to_string(),
            gender: "Unisex".to_string(),
            brand: "ComfortWear".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_map_row_into_product() {
        let product = entity(40).into_domain().unwrap();

        assert_eq!(product.name, "Gray Hoodie");
        assert_eq!(product.stock, 40);
        assert_eq!(product.price.to_string(), "39.99");
    }

    #[test]
    fn should_reject_negative_stock() {
        assert!(matches!(
            entity(-1).into_domain(),
            Err(RepositoryError::CorruptedDocument)
        ));
    }
}
