mod auth;
mod branch;
mod category;
mod product;
mod retail;
mod retail_product;
mod retail_product_availability;
mod retail_product_price;
mod sub_category;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::branch::{
    BranchRepositoryTrait, BranchServiceTrait, DynBranchRepository, DynBranchService,
};
pub use self::category::{
    CategoryRepositoryTrait, CategoryServiceTrait, DynCategoryRepository, DynCategoryService,
};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::retail::{
    DynRetailRepository, DynRetailService, RetailRepositoryTrait, RetailServiceTrait,
};
pub use self::retail_product::{
    DynRetailProductRepository, DynRetailProductService, RetailProductRepositoryTrait,
    RetailProductServiceTrait,
};
pub use self::retail_product_availability::{
    DynRetailProductAvailabilityRepository, DynRetailProductAvailabilityService,
    RetailProductAvailabilityRepositoryTrait, RetailProductAvailabilityServiceTrait,
};
pub use self::retail_product_price::{
    DynRetailProductPriceRepository, DynRetailProductPriceService,
    RetailProductPriceRepositoryTrait, RetailProductPriceServiceTrait,
};
pub use self::sub_category::{
    DynSubCategoryRepository, DynSubCategoryService, SubCategoryRepositoryTrait,
    SubCategoryServiceTrait,
};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
