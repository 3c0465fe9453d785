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

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::branch::{CreateBranchRequest, UpdateBranchRequest};
pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::retail::{CreateRetailRequest, UpdateRetailRequest};
pub use self::retail_product::CreateRetailProductRequest;
pub use self::retail_product_availability::{
    AvailabilityRangeQuery, CreateAvailabilityRequest, CurrentAvailabilityQuery,
    UpdateAvailabilityRequest,
};
pub use self::retail_product_price::{
    CreatePriceRequest, CurrentPriceQuery, UpdatePriceRequest,
};
pub use self::sub_category::{CreateSubCategoryRequest, UpdateSubCategoryRequest};
pub use self::user::{CreateUserRequest, UpdateUserRequest};
