use crate::{
    abstract_trait::{
        DynAuthService, DynBranchRepository, DynBranchService, DynCategoryRepository,
        DynCategoryService, DynProductRepository, DynProductService, DynRetailProductRepository,
        DynRetailProductService, DynRetailProductAvailabilityRepository,
        DynRetailProductAvailabilityService, DynRetailProductPriceRepository,
        DynRetailProductPriceService, DynRetailRepository, DynRetailService,
        DynSubCategoryRepository, DynSubCategoryService, DynUserRepository, DynUserService,
    },
    repository::{
        BranchRepository, CategoryRepository, ProductRepository, RetailProductAvailabilityRepository,
        RetailProductPriceRepository, RetailProductRepository, RetailRepository,
        SubCategoryRepository, UserRepository,
    },
    service::{
        AuthService, BranchService, CategoryService, ProductService,
        RetailProductAvailabilityService, RetailProductPriceService, RetailProductService,
        RetailService, SubCategoryService, UserService,
    },
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub retail_service: DynRetailService,
    pub branch_service: DynBranchService,
    pub category_service: DynCategoryService,
    pub sub_category_service: DynSubCategoryService,
    pub product_service: DynProductService,
    pub retail_product_service: DynRetailProductService,
    pub retail_product_price_service: DynRetailProductPriceService,
    pub retail_product_availability_service: DynRetailProductAvailabilityService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("user_service", &"UserService")
            .field("retail_service", &"RetailService")
            .field("branch_service", &"BranchService")
            .field("category_service", &"CategoryService")
            .field("sub_category_service", &"SubCategoryService")
            .field("product_service", &"ProductService")
            .field("retail_product_service", &"RetailProductService")
            .field("retail_product_price_service", &"RetailProductPriceService")
            .field(
                "retail_product_availability_service",
                &"RetailProductAvailabilityService",
            )
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let user_repository =
            Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let retail_repository =
            Arc::new(RetailRepository::new(pool.clone())) as DynRetailRepository;
        let branch_repository =
            Arc::new(BranchRepository::new(pool.clone())) as DynBranchRepository;
        let category_repository =
            Arc::new(CategoryRepository::new(pool.clone())) as DynCategoryRepository;
        let sub_category_repository =
            Arc::new(SubCategoryRepository::new(pool.clone())) as DynSubCategoryRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let retail_product_repository =
            Arc::new(RetailProductRepository::new(pool.clone())) as DynRetailProductRepository;
        let price_repository = Arc::new(RetailProductPriceRepository::new(pool.clone()))
            as DynRetailProductPriceRepository;
        let availability_repository =
            Arc::new(RetailProductAvailabilityRepository::new(pool.clone()))
                as DynRetailProductAvailabilityRepository;

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            hashing.clone(),
            jwt,
        )) as DynAuthService;

        let user_service =
            Arc::new(UserService::new(user_repository, hashing)) as DynUserService;

        let retail_service =
            Arc::new(RetailService::new(retail_repository.clone())) as DynRetailService;

        let branch_service = Arc::new(BranchService::new(
            branch_repository,
            retail_repository.clone(),
        )) as DynBranchService;

        let category_service =
            Arc::new(CategoryService::new(category_repository.clone())) as DynCategoryService;

        let sub_category_service = Arc::new(SubCategoryService::new(
            sub_category_repository.clone(),
            category_repository,
        )) as DynSubCategoryService;

        let product_service = Arc::new(ProductService::new(
            product_repository.clone(),
            sub_category_repository,
        )) as DynProductService;

        let retail_product_service = Arc::new(RetailProductService::new(
            retail_product_repository.clone(),
            retail_repository.clone(),
            product_repository.clone(),
        )) as DynRetailProductService;

        let retail_product_price_service = Arc::new(RetailProductPriceService::new(
            price_repository,
            retail_repository.clone(),
            product_repository.clone(),
            retail_product_repository.clone(),
        )) as DynRetailProductPriceService;

        let retail_product_availability_service =
            Arc::new(RetailProductAvailabilityService::new(
                availability_repository,
                retail_repository,
                product_repository,
                retail_product_repository,
            )) as DynRetailProductAvailabilityService;

        Self {
            auth_service,
            user_service,
            retail_service,
            branch_service,
            category_service,
            sub_category_service,
            product_service,
            retail_product_service,
            retail_product_price_service,
            retail_product_availability_service,
        }
    }
}
