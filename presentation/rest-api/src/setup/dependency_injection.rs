use std::sync::Arc;

use logger::TracingLogger;
use persistence::bin::repository::BinRepositoryPostgres;
use persistence::brand::repository::BrandRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::sector::repository::SectorRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::bin::create::CreateBinUseCaseImpl;
use business::application::bin::delete::DeleteBinUseCaseImpl;
use business::application::bin::get_all::GetAllBinsUseCaseImpl;
use business::application::bin::get_by_id::GetBinByIdUseCaseImpl;
use business::application::bin::get_empty::GetEmptyBinsUseCaseImpl;
use business::application::bin::get_occupied::GetOccupiedBinsUseCaseImpl;
use business::application::bin::update::UpdateBinUseCaseImpl;
use business::application::brand::create::CreateBrandUseCaseImpl;
use business::application::brand::delete::DeleteBrandUseCaseImpl;
use business::application::brand::get_all::GetAllBrandsUseCaseImpl;
use business::application::brand::get_by_id::GetBrandByIdUseCaseImpl;
use business::application::brand::update::UpdateBrandUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_oldest::GetOldestProductsUseCaseImpl;
use business::application::product::get_on_promotion::GetProductsOnPromotionUseCaseImpl;
use business::application::product::toggle_promotion::TogglePromotionUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::sector::create::CreateSectorUseCaseImpl;
use business::application::sector::delete::DeleteSectorUseCaseImpl;
use business::application::sector::get_all::GetAllSectorsUseCaseImpl;
use business::application::sector::get_by_id::GetSectorByIdUseCaseImpl;
use business::application::sector::update::UpdateSectorUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub brand_api: crate::api::brand::routes::BrandApi,
    pub sector_api: crate::api::sector::routes::SectorApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub bin_api: crate::api::bin::routes::BinApi,
    pub user_api: crate::api::user::routes::UserApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let brand_repository = Arc::new(BrandRepositoryPostgres::new(pool.clone()));
        let sector_repository = Arc::new(SectorRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let bin_repository = Arc::new(BinRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        // Category use cases
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_category_by_id_use_case = Arc::new(GetCategoryByIdUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });

        // Brand use cases
        let create_brand_use_case = Arc::new(CreateBrandUseCaseImpl {
            repository: brand_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_brands_use_case = Arc::new(GetAllBrandsUseCaseImpl {
            repository: brand_repository.clone(),
            logger: logger.clone(),
        });
        let get_brand_by_id_use_case = Arc::new(GetBrandByIdUseCaseImpl {
            repository: brand_repository.clone(),
            logger: logger.clone(),
        });
        let update_brand_use_case = Arc::new(UpdateBrandUseCaseImpl {
            repository: brand_repository.clone(),
            logger: logger.clone(),
        });
        let delete_brand_use_case = Arc::new(DeleteBrandUseCaseImpl {
            repository: brand_repository.clone(),
            logger: logger.clone(),
        });

        // Sector use cases
        let create_sector_use_case = Arc::new(CreateSectorUseCaseImpl {
            repository: sector_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_sectors_use_case = Arc::new(GetAllSectorsUseCaseImpl {
            repository: sector_repository.clone(),
            logger: logger.clone(),
        });
        let get_sector_by_id_use_case = Arc::new(GetSectorByIdUseCaseImpl {
            repository: sector_repository.clone(),
            logger: logger.clone(),
        });
        let update_sector_use_case = Arc::new(UpdateSectorUseCaseImpl {
            repository: sector_repository.clone(),
            logger: logger.clone(),
        });
        let delete_sector_use_case = Arc::new(DeleteSectorUseCaseImpl {
            repository: sector_repository.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            brand_repository: brand_repository.clone(),
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
            category_repository,
            brand_repository,
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_oldest_products_use_case = Arc::new(GetOldestProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_products_on_promotion_use_case = Arc::new(GetProductsOnPromotionUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_promotion_use_case = Arc::new(TogglePromotionUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Bin use cases
        let create_bin_use_case = Arc::new(CreateBinUseCaseImpl {
            repository: bin_repository.clone(),
            sector_repository: sector_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_bins_use_case = Arc::new(GetAllBinsUseCaseImpl {
            repository: bin_repository.clone(),
            logger: logger.clone(),
        });
        let get_bin_by_id_use_case = Arc::new(GetBinByIdUseCaseImpl {
            repository: bin_repository.clone(),
            logger: logger.clone(),
        });
        let update_bin_use_case = Arc::new(UpdateBinUseCaseImpl {
            repository: bin_repository.clone(),
            sector_repository,
            product_repository,
            logger: logger.clone(),
        });
        let delete_bin_use_case = Arc::new(DeleteBinUseCaseImpl {
            repository: bin_repository.clone(),
            logger: logger.clone(),
        });
        let get_empty_bins_use_case = Arc::new(GetEmptyBinsUseCaseImpl {
            repository: bin_repository.clone(),
            logger: logger.clone(),
        });
        let get_occupied_bins_use_case = Arc::new(GetOccupiedBinsUseCaseImpl {
            repository: bin_repository,
            logger: logger.clone(),
        });

        // User use cases
        let get_all_users_use_case = Arc::new(GetAllUsersUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_user_by_id_use_case = Arc::new(GetUserByIdUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let category_api = crate::api::category::routes::CategoryApi::new(
            create_category_use_case,
            get_all_categories_use_case,
            get_category_by_id_use_case,
            update_category_use_case,
            delete_category_use_case,
        );

        let brand_api = crate::api::brand::routes::BrandApi::new(
            create_brand_use_case,
            get_all_brands_use_case,
            get_brand_by_id_use_case,
            update_brand_use_case,
            delete_brand_use_case,
        );

        let sector_api = crate::api::sector::routes::SectorApi::new(
            create_sector_use_case,
            get_all_sectors_use_case,
            get_sector_by_id_use_case,
            update_sector_use_case,
            delete_sector_use_case,
        );

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
            get_oldest_products_use_case,
            get_products_on_promotion_use_case,
            toggle_promotion_use_case,
        );

        let bin_api = crate::api::bin::routes::BinApi::new(
            create_bin_use_case,
            get_all_bins_use_case,
            get_bin_by_id_use_case,
            update_bin_use_case,
            delete_bin_use_case,
            get_empty_bins_use_case,
            get_occupied_bins_use_case,
        );

        let user_api =
            crate::api::user::routes::UserApi::new(get_all_users_use_case, get_user_by_id_use_case);

        Self {
            health_api,
            category_api,
            brand_api,
            sector_api,
            product_api,
            bin_api,
            user_api,
        }
    }
}
