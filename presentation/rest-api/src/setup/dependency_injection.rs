use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::compute_margins::ComputeMarginsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_above_price::GetProductsAbovePriceUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::admin::routes::AdminApi;
use crate::api::diagnostics::routes::DiagnosticsApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub admin_api: AdminApi,
    pub diagnostics_api: DiagnosticsApi,
}

impl DependencyContainer {
    /// Wires every use case to the single product repository.
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let compute_margins_use_case = Arc::new(ComputeMarginsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let above_price_use_case = Arc::new(GetProductsAbovePriceUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            product_api,
            admin_api: AdminApi::new(compute_margins_use_case),
            diagnostics_api: DiagnosticsApi::new(above_price_use_case),
        }
    }
}
