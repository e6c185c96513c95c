use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::seed::SeedCatalogUseCase;

struct StarterProduct {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    image: &'static str,
    stock: u32,
    category: &'static str,
    size: &'static str,
    color: &'static str,
    material: &'static str,
    gender: &'static str,
    brand: &'static str,
}

const STARTER_CATALOG: [StarterProduct; 10] = [
    StarterProduct {
        name: "Classic White T-Shirt",
        description: "Comfortable cotton t-shirt perfect for everyday wear",
        price_cents: 1999,
        image: "white-tshirt.jpg",
        stock: 50,
        category: "T-Shirts",
        size: "M",
        color: "White",
        material: "Cotton",
        gender: "Unisex",
        brand: "BasicWear",
    },
    StarterProduct {
        name: "Blue Denim Jeans",
        description: "Classic blue jeans with perfect fit",
        price_cents: 7999,
        image: "blue-jeans.jpg",
        stock: 30,
        category: "Jeans",
        size: "32W x 34L",
        color: "Blue",
        material: "Denim",
        gender: "Men",
        brand: "DenimCo",
    },
    StarterProduct {
        name: "Black Leather Jacket",
        description: "Stylish black leather jacket for any occasion",
        price_cents: 14999,
        image: "leather-jacket.jpg",
        stock: 15,
        category: "Jackets",
        size: "L",
        color: "Black",
        material: "Leather",
        gender: "Unisex",
        brand: "LeatherLux",
    },
    StarterProduct {
        name: "Red Summer Dress",
        description: "Light and breezy summer dress",
        price_cents: 4599,
        image: "red-dress.jpg",
        stock: 25,
        category: "Dresses",
        size: "S",
        color: "Red",
        material: "Cotton",
        gender: "Women",
        brand: "SummerStyle",
    },
    StarterProduct {
        name: "Gray Hoodie",
        description: "Comfortable hoodie for casual wear",
        price_cents: 3999,
        image: "gray-hoodie.jpg",
        stock: 40,
        category: "Hoodies",
        size: "XL",
        color: "Gray",
        material: "Cotton",
        gender: "Unisex",
        brand: "ComfortWear",
    },
    StarterProduct {
        name: "White Sneakers",
        description: "Classic white sneakers for everyday use",
        price_cents: 8999,
        image: "white-sneakers.jpg",
        stock: 35,
        category: "Shoes",
        size: "42",
        color: "White",
        material: "Synthetic",
        gender: "Unisex",
        brand: "SportStyle",
    },
    StarterProduct {
        name: "Navy Blue Blazer",
        description: "Professional blazer for business attire",
        price_cents: 12999,
        image: "navy-blazer.jpg",
        stock: 20,
        category: "Blazers",
        size: "M",
        color: "Navy",
        material: "Wool",
        gender: "Men",
        brand: "BusinessWear",
    },
    StarterProduct {
        name: "Green Cargo Pants",
        description: "Durable cargo pants with multiple pockets",
        price_cents: 5999,
        image: "cargo-pants.jpg",
        stock: 28,
        category: "Pants",
        size: "34W x 32L",
        color: "Green",
        material: "Cotton",
        gender: "Men",
        brand: "AdventureGear",
    },
    StarterProduct {
        name: "Pink Floral Skirt",
        description: "Beautiful floral skirt for spring",
        price_cents: 3499,
        image: "floral-skirt.jpg",
        stock: 22,
        category: "Skirts",
        size: "M",
        color: "Pink",
        material: "Cotton",
        gender: "Women",
        brand: "FloralFashion",
    },
    StarterProduct {
        name: "Black Polo Shirt",
        description: "Classic black polo shirt",
        price_cents: 2999,
        image: "black-polo.jpg",
        stock: 45,
        category: "Polos",
        size: "L",
        color: "Black",
        material: "Cotton",
        gender: "Men",
        brand: "ClassicWear",
    },
];

impl StarterProduct {
    fn props(&self) -> ProductProps {
        ProductProps {
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: BigDecimal::new(self.price_cents.into(), 2),
            image_url: Some(format!("https://example.com/images/{}", self.image)),
            stock: self.stock,
            category: self.category.to_string(),
            size: self.size.to_string(),
            color: self.color.to_string(),
            material: self.material.to_string(),
            gender: self.gender.to_string(),
            brand: self.brand.to_string(),
        }
    }
}

pub struct SeedCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedCatalogUseCase for SeedCatalogUseCaseImpl {
    async fn execute(&self) -> Result<usize, ProductError> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            self.logger.debug(&format!(
                "Catalog already holds {} products, skipping seed",
                existing
            ));
            return Ok(0);
        }

        for starter in &STARTER_CATALOG {
            let product = Product::new(starter.props())?;
            self.repository.save(&product).await?;
        }

        self.logger.info(&format!(
            "Seeded catalog with {} products",
            STARTER_CATALOG.len()
        ));
        Ok(STARTER_CATALOG.len())
    }
}
