mod branch;
mod category;
mod product;
mod retail;
mod retail_product;
mod retail_product_availability;
mod retail_product_price;
mod sub_category;
mod user;

pub use self::branch::BranchRepository;
pub use self::category::CategoryRepository;
pub use self::product::ProductRepository;
pub use self::retail::RetailRepository;
pub use self::retail_product::RetailProductRepository;
pub use self::retail_product_availability::RetailProductAvailabilityRepository;
pub use self::retail_product_price::RetailProductPriceRepository;
pub use self::sub_category::SubCategoryRepository;
pub use self::user::UserRepository;
