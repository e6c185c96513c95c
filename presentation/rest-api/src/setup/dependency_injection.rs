use std::sync::Arc;

use logger::TracingLogger;
use payment::SimulatedPaymentGateway;
use persistence::basket::repository::BasketRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::jwt::JwtTokenService;
use security::password_hasher::Argon2PasswordHasher;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::basket::add_item::AddBasketItemUseCaseImpl;
use business::application::basket::clear::ClearBasketUseCaseImpl;
use business::application::basket::get::GetBasketUseCaseImpl;
use business::application::basket::remove_item::RemoveBasketItemUseCaseImpl;
use business::application::checkout::get_order::GetOrderUseCaseImpl;
use business::application::checkout::get_user_orders::GetUserOrdersUseCaseImpl;
use business::application::checkout::place_order::CheckoutUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::seed::SeedCatalogUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::use_cases::seed::SeedCatalogUseCase;

use crate::api::auth::routes::AuthApi;
use crate::api::basket::routes::BasketApi;
use crate::api::checkout::routes::{CheckoutApi, OrdersApi};
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub product_api: ProductApi,
    pub basket_api: BasketApi,
    pub checkout_api: CheckoutApi,
    pub orders_api: OrdersApi,
    /// Shared with the bearer checker through request data.
    pub token_verifier: Arc<JwtTokenService>,
    pub seed_catalog: Arc<dyn SeedCatalogUseCase>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let basket_repository = Arc::new(BasketRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));

        let hasher = Arc::new(Argon2PasswordHasher::new());
        let token_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let payment_gateway = Arc::new(SimulatedPaymentGateway::new(config.payment));

        // Auth use cases
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            token_issuer: token_service.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository,
            hasher,
            token_issuer: token_service.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let seed_catalog = Arc::new(SeedCatalogUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Basket use cases
        let get_basket_use_case = Arc::new(GetBasketUseCaseImpl {
            repository: basket_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_basket_item_use_case = Arc::new(AddBasketItemUseCaseImpl {
            repository: basket_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_basket_item_use_case = Arc::new(RemoveBasketItemUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });
        let clear_basket_use_case = Arc::new(ClearBasketUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });

        // Checkout and order use cases
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            basket_repository,
            product_repository: product_repository.clone(),
            order_repository: order_repository.clone(),
            payment_gateway,
            logger: logger.clone(),
        });
        let get_order_use_case = Arc::new(GetOrderUseCaseImpl {
            repository: order_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_user_orders_use_case = Arc::new(GetUserOrdersUseCaseImpl {
            repository: order_repository,
            product_repository,
            logger,
        });

        Ok(Self {
            health_api: HealthApi,
            auth_api: AuthApi::new(register_use_case, login_use_case),
            product_api: ProductApi::new(
                create_product_use_case,
                get_all_products_use_case,
                get_product_by_id_use_case,
                update_product_use_case,
                delete_product_use_case,
            ),
            basket_api: BasketApi::new(
                get_basket_use_case,
                add_basket_item_use_case,
                remove_basket_item_use_case,
                clear_basket_use_case,
            ),
            checkout_api: CheckoutApi::new(checkout_use_case),
            orders_api: OrdersApi::new(get_order_use_case, get_user_orders_use_case),
            token_verifier: token_service,
            seed_catalog,
        })
    }
}
