use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryInMemory;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::get_all::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::model::ProductDraft;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    /// Wires the use cases over fresh in-memory stores. The catalog starts
    /// with `seed_products`; the cart always starts empty.
    pub fn new(seed_products: Vec<ProductDraft>) -> Self {
        let catalog_logger = Arc::new(TracingLogger::new("catalog"));
        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::with_products(seed_products));
        let cart_repository = Arc::new(CartRepositoryInMemory::new());

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger,
        });

        // Cart use cases
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: cart_logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            repository: cart_repository,
            logger: cart_logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_to_cart_use_case,
            get_cart_use_case,
            remove_from_cart_use_case,
        );

        Self {
            health_api,
            product_api,
            cart_api,
        }
    }
}
