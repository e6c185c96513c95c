use std::sync::Arc;

use async_trait::async_trait;

use super::get_order::order_view;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::use_cases::get_user_orders::{
    GetUserOrdersParams, GetUserOrdersUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::order::model::{OrdersPage, PaginationInfo};
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::PageRequest;

pub struct GetUserOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserOrdersUseCase for GetUserOrdersUseCaseImpl {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<OrdersPage, CheckoutError> {
        let page = PageRequest::new(params.page, params.limit)?;
        self.logger.debug(&format!(
            "Fetching orders page {} (limit {}) for user: {}",
            page.page(),
            page.limit(),
            params.user_id
        ));

        let orders = self
            .repository
            .find_by_user_id(&params.user_id, &page)
            .await?;
        let total = self.repository.count_by_user_id(&params.user_id).await?;

        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            views.push(order_view(self.product_repository.as_ref(), order).await?);
        }

        Ok(OrdersPage {
            orders: views,
            pagination: PaginationInfo {
                page: page.page(),
                limit: page.limit(),
                total,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::basket::model::BasketItem;
    use crate::domain::order::model::Order;
    use crate::domain::order::value_objects::{PaymentMethod, ShippingAddress};
    use crate::domain::shared::value_objects::PaginationError;
    use crate::test_support::{MockOrderRepo, MockProductRepo, make_product, mock_logger, price, test_user_id};
    use uuid::Uuid;

    fn order() -> Order {
        Order::paid(
            test_user_id(),
            &[BasketItem {
                product_id: Uuid::new_v4(),
                quantity: 1,
                unit_price: price("10.00"),
            }],
            ShippingAddress::new(
                "1 Main St".to_string(),
                "Springfield".to_string(),
                "12345".to_string(),
                "USA".to_string(),
            )
            .unwrap(),
            PaymentMethod::new("paypal").unwrap(),
        )
    }

    #[tokio::test]
    async fn should_return_second_page_with_total_of_all_orders() {
        let mut orders = MockOrderRepo::new();
        orders
            .expect_find_by_user_id()
            .withf(|_, page| page.offset() == 10 && page.limit() == 10)
            .times(1)
            .returning(|_, _| Ok((0..5).map(|_| order()).collect()));
        orders.expect_count_by_user_id().returning(|_| Ok(15));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Beanie", "10.00", 1)));

        let use_case = GetUserOrdersUseCaseImpl {
            repository: Arc::new(orders),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetUserOrdersParams {
                user_id: test_user_id(),
                page: 2,
                limit: 10,
            })
            .await
            .unwrap();

        assert_eq!(page.orders.len(), 5);
        assert_eq!(
            page.pagination,
            PaginationInfo {
                page: 2,
                limit: 10,
                total: 15
            }
        );
        assert!(page.orders.iter().all(|o| o.items[0].name == "Beanie"));
    }

    #[tokio::test]
    async fn should_reject_limit_above_maximum() {
        let mut orders = MockOrderRepo::new();
        orders.expect_find_by_user_id().never();

        let use_case = GetUserOrdersUseCaseImpl {
            repository: Arc::new(orders),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserOrdersParams {
                user_id: test_user_id(),
                page: 1,
                limit: 101,
            })
            .await;

        assert!(matches!(
            result,
            Err(CheckoutError::InvalidPagination(PaginationError::InvalidLimit))
        ));
    }

    #[tokio::test]
    async fn should_reject_page_zero() {
        let use_case = GetUserOrdersUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserOrdersParams {
                user_id: test_user_id(),
                page: 0,
                limit: 10,
            })
            .await;

        assert!(matches!(
            result,
            Err(CheckoutError::InvalidPagination(PaginationError::InvalidPage))
        ));
    }
}
