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

pub use self::auth::AuthService;
pub use self::branch::BranchService;
pub use self::category::CategoryService;
pub use self::product::ProductService;
pub use self::retail::RetailService;
pub use self::retail_product::RetailProductService;
pub use self::retail_product_availability::RetailProductAvailabilityService;
pub use self::retail_product_price::RetailProductPriceService;
pub use self::sub_category::SubCategoryService;
pub use self::user::UserService;
