use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::repository::BasketRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::services::{PaymentGateway, PaymentRequest};
use crate::domain::checkout::use_cases::place_order::{CheckoutParams, CheckoutUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::{Order, OrderSummary};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::value_objects::{PaymentMethod, ShippingAddress};
use crate::domain::product::repository::ProductRepository;

pub struct CheckoutUseCaseImpl {
    pub basket_repository: Arc<dyn BasketRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<OrderSummary, CheckoutError> {
        self.logger
            .info(&format!("Checkout started for user: {}", params.user_id));

        let address = params.shipping_address;
        let shipping_address =
            ShippingAddress::new(address.street, address.city, address.postal_code, address.country)?;
        let payment_method = PaymentMethod::new(params.payment_method)?;

        let mut basket = match self
            .basket_repository
            .find_by_user_id(&params.user_id)
            .await?
        {
            Some(basket) if !basket.is_empty() => basket,
            _ => return Err(CheckoutError::EmptyBasket),
        };

        for item in &basket.items {
            let product = self
                .product_repository
                .get_by_id(item.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CheckoutError::ProductNotFound(item.product_id),
                    other => CheckoutError::Repository(other),
                })?;
            if product.stock < item.quantity {
                self.logger.warn(&format!(
                    "Checkout rejected, insufficient stock for {}: requested {}, available {}",
                    product.id, item.quantity, product.stock
                ));
                return Err(CheckoutError::InsufficientStock(product.name));
            }
        }

        let request = PaymentRequest {
            user_id: params.user_id,
            basket_id: basket.id,
            amount: basket.total(),
            method: payment_method.clone(),
        };
        if let Err(e) = self.payment_gateway.charge(&request).await {
            self.logger.warn(&format!(
                "Payment of {} failed for user {}: {}",
                request.amount, params.user_id, e
            ));
            return Err(CheckoutError::PaymentFailed);
        }

        let order = Order::paid(params.user_id, &basket.items, shipping_address, payment_method);
        self.order_repository.save(&order).await?;

        basket.clear();
        self.basket_repository.save(&basket).await?;

        self.logger.info(&format!(
            "Order {} placed for user {} totalling {}",
            order.id, params.user_id, order.total_amount
        ));
        Ok(order.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::basket::model::Basket;
    use crate::domain::checkout::services::PaymentError;
    use crate::domain::checkout::use_cases::place_order::ShippingAddressParams;
    use crate::domain::order::errors::OrderError;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::test_support::{
        MockBasketRepo, MockOrderRepo, MockPayments, MockProductRepo, make_product, mock_logger,
        price, test_user_id,
    };
    use std::sync::Mutex;
    use uuid::Uuid;

    fn params() -> CheckoutParams {
        CheckoutParams {
            user_id: test_user_id(),
            shipping_address: ShippingAddressParams {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                postal_code: "12345".to_string(),
                country: "USA".to_string(),
            },
            payment_method: "credit_card".to_string(),
        }
    }

    fn basket_with(lines: &[(Uuid, u32, &str)]) -> Basket {
        let mut basket = Basket::new(test_user_id());
        for (id, quantity, unit_price) in lines {
            basket.add(*id, *quantity, price(unit_price)).unwrap();
        }
        basket
    }

    fn products_in_stock(stock: u32) -> MockProductRepo {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |id| Ok(make_product(id, "Classic Tee", "99.00", stock)));
        products
    }

    fn accepting_gateway() -> MockPayments {
        let mut payments = MockPayments::new();
        payments.expect_charge().returning(|_| Ok(()));
        payments
    }

    #[tokio::test]
    async fn should_place_paid_order_and_clear_basket() {
        let basket = basket_with(&[
            (Uuid::new_v4(), 2, "19.99"),
            (Uuid::new_v4(), 1, "29.99"),
        ]);
        let basket_id = basket.id;
        let saved_order: Arc<Mutex<Option<Order>>> = Arc::new(Mutex::new(None));

        let mut baskets = MockBasketRepo::new();
        baskets
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(basket.clone())));
        baskets
            .expect_save()
            .withf(move |b| b.id == basket_id && b.is_empty())
            .times(1)
            .returning(|_| Ok(()));
        let mut orders = MockOrderRepo::new();
        let slot = saved_order.clone();
        orders.expect_save().times(1).returning(move |order| {
            *slot.lock().unwrap() = Some(order.clone());
            Ok(())
        });
        let mut payments = MockPayments::new();
        payments
            .expect_charge()
            .withf(|request| request.amount == price("69.97"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(products_in_stock(10)),
            order_repository: Arc::new(orders),
            payment_gateway: Arc::new(payments),
            logger: mock_logger(),
        };

        let summary = use_case.execute(params()).await.unwrap();

        assert_eq!(summary.total_amount, price("69.97"));
        assert_eq!(summary.status, OrderStatus::Paid);
        let order = saved_order.lock().unwrap().clone().unwrap();
        assert_eq!(order.id, summary.order_id);
        assert_eq!(order.user_id, test_user_id());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.payment_method.as_str(), "credit_card");
    }

    #[tokio::test]
    async fn should_fail_when_basket_missing() {
        let mut baskets = MockBasketRepo::new();
        baskets.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(MockProductRepo::new()),
            order_repository: Arc::new(MockOrderRepo::new()),
            payment_gateway: Arc::new(MockPayments::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(CheckoutError::EmptyBasket)));
    }

    #[tokio::test]
    async fn should_fail_when_basket_empty() {
        let mut baskets = MockBasketRepo::new();
        baskets
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(Basket::new(test_user_id()))));

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(MockProductRepo::new()),
            order_repository: Arc::new(MockOrderRepo::new()),
            payment_gateway: Arc::new(MockPayments::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(CheckoutError::EmptyBasket)));
    }

    #[tokio::test]
    async fn should_name_product_when_stock_insufficient() {
        let basket = basket_with(&[(Uuid::new_v4(), 5, "19.99")]);
        let mut baskets = MockBasketRepo::new();
        baskets
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(basket.clone())));
        baskets.expect_save().never();
        let mut payments = MockPayments::new();
        payments.expect_charge().never();

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(products_in_stock(4)),
            order_repository: Arc::new(MockOrderRepo::new()),
            payment_gateway: Arc::new(payments),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        match result {
            Err(CheckoutError::InsufficientStock(name)) => assert_eq!(name, "Classic Tee"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_stop_at_first_missing_product() {
        let (missing, never_checked) = (Uuid::new_v4(), Uuid::new_v4());
        let basket = basket_with(&[(missing, 1, "1.00"), (never_checked, 1, "1.00")]);
        let mut baskets = MockBasketRepo::new();
        baskets
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(basket.clone())));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(products),
            order_repository: Arc::new(MockOrderRepo::new()),
            payment_gateway: Arc::new(MockPayments::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(CheckoutError::ProductNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn should_leave_basket_untouched_when_payment_declined() {
        let basket = basket_with(&[(Uuid::new_v4(), 1, "19.99")]);
        let mut baskets = MockBasketRepo::new();
        baskets
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(basket.clone())));
        baskets.expect_save().never();
        let mut orders = MockOrderRepo::new();
        orders.expect_save().never();
        let mut payments = MockPayments::new();
        payments
            .expect_charge()
            .returning(|_| Err(PaymentError::Declined));

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(products_in_stock(10)),
            order_repository: Arc::new(orders),
            payment_gateway: Arc::new(payments),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(CheckoutError::PaymentFailed)));
    }

    #[tokio::test]
    async fn should_reject_blank_payment_method_before_touching_basket() {
        let mut baskets = MockBasketRepo::new();
        baskets.expect_find_by_user_id().never();

        let use_case = CheckoutUseCaseImpl {
            basket_repository: Arc::new(baskets),
            product_repository: Arc::new(MockProductRepo::new()),
            order_repository: Arc::new(MockOrderRepo::new()),
            payment_gateway: Arc::new(accepting_gateway()),
            logger: mock_logger(),
        };

        let mut p = params();
        p.payment_method = "   ".to_string();
        let result = use_case.execute(p).await;

        assert!(matches!(
            result,
            Err(CheckoutError::InvalidOrder(OrderError::InvalidPaymentMethod))
        ));
    }
}
