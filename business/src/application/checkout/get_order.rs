use std::sync::Arc;

use async_trait::async_trait;

use crate::application::basket::enrich::current_product_name;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::use_cases::get_order::{GetOrderParams, GetOrderUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::{Order, OrderItemView, OrderView, UNKNOWN_PRODUCT_NAME};
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::repository::ProductRepository;

pub struct GetOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Attaches the current product name to every line of `order`.
pub(crate) async fn order_view(
    products: &dyn ProductRepository,
    order: Order,
) -> Result<OrderView, RepositoryError> {
    let mut items = Vec::with_capacity(order.items.len());
    for item in order.items {
        let name = current_product_name(products, item.product_id)
            .await?
            .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string());
        items.push(OrderItemView {
            product_id: item.product_id,
            name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        });
    }

    Ok(OrderView {
        order_id: order.id,
        total_amount: order.total_amount,
        status: order.status,
        created_at: order.created_at,
        items,
    })
}

#[async_trait]
impl GetOrderUseCase for GetOrderUseCaseImpl {
    async fn execute(&self, params: GetOrderParams) -> Result<OrderView, CheckoutError> {
        self.logger.debug(&format!(
            "Fetching order {} for user: {}",
            params.order_id, params.user_id
        ));

        let order = self
            .repository
            .get_by_id(params.order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CheckoutError::OrderNotFound,
                other => CheckoutError::Repository(other),
            })?;

        // Other users' orders are indistinguishable from missing ones.
        if order.user_id != params.user_id {
            return Err(CheckoutError::OrderNotFound);
        }

        Ok(order_view(self.product_repository.as_ref(), order).await?)
    }
}
