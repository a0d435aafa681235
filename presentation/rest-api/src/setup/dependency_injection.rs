use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::file_repository::CartRepositoryJson;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::file_repository::ProductRepositoryJson;
use persistence::product::repository::ProductRepositoryPostgres;
use realtime::event_bus::BroadcastEventBus;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::get_all::GetAllCartsUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::cart::remove_product::RemoveProductFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_page::GetProductsPageUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::cart::repository::CartRepository;
use business::domain::logger::Logger;
use business::domain::notification::event_bus::ProductEventBus;
use business::domain::product::repository::ProductRepository;

use crate::api::realtime::gateway::RealtimeGateway;
use crate::api::realtime::handler::RealtimeHandler;
use crate::config::app_config::AppConfig;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub realtime: RealtimeGateway,
}

type Repositories = (Arc<dyn ProductRepository>, Arc<dyn CartRepository>);

async fn init_repositories(storage: &StorageConfig) -> anyhow::Result<Repositories> {
    match storage {
        StorageConfig::File {
            products_path,
            carts_path,
        } => {
            tracing::info!(
                products = %products_path.display(),
                carts = %carts_path.display(),
                "Using JSON file storage"
            );
            let products: Arc<dyn ProductRepository> =
                Arc::new(ProductRepositoryJson::new(products_path));
            let carts: Arc<dyn CartRepository> = Arc::new(CartRepositoryJson::new(carts_path));
            Ok((products, carts))
        }
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let config = DatabaseConfig::new(database_url.clone())
                .with_max_connections(*max_connections);
            let pool = create_postgres_pool(&config).await?;
            run_migrations(&pool).await?;
            tracing::info!("Using PostgreSQL storage");
            let products: Arc<dyn ProductRepository> =
                Arc::new(ProductRepositoryPostgres::new(pool.clone()));
            let carts: Arc<dyn CartRepository> = Arc::new(CartRepositoryPostgres::new(pool));
            Ok((products, carts))
        }
    }
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let product_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("product"));
        let cart_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("cart"));
        let health_api = crate::api::health::routes::Api::new(config.storage.backend_name());

        // Infrastructure adapters
        let (product_repository, cart_repository) = init_repositories(&config.storage).await?;
        let event_bus: Arc<dyn ProductEventBus> = Arc::new(BroadcastEventBus::with_capacity(
            config.realtime.channel_capacity,
        ));

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            event_bus: event_bus.clone(),
            logger: product_logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_products_page_use_case = Arc::new(GetProductsPageUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            event_bus: event_bus.clone(),
            logger: product_logger,
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_all_carts_use_case = Arc::new(GetAllCartsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_cart_by_id_use_case = Arc::new(GetCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let delete_cart_use_case = Arc::new(DeleteCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: cart_logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductFromCartUseCaseImpl {
            repository: cart_repository,
            logger: cart_logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case.clone(),
            get_products_page_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case.clone(),
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            create_cart_use_case,
            get_all_carts_use_case,
            get_cart_by_id_use_case,
            delete_cart_use_case,
            add_product_use_case,
            update_quantity_use_case,
            remove_product_use_case,
        );

        let realtime = RealtimeGateway {
            event_bus,
            get_all_use_case: get_all_products_use_case,
            handler: Arc::new(RealtimeHandler::new(
                create_product_use_case,
                delete_product_use_case,
            )),
        };

        Ok(Self {
            health_api,
            product_api,
            cart_api,
            realtime,
        })
    }
}
