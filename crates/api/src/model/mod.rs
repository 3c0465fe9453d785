mod branch;
mod category;
mod product;
mod retail;
mod retail_product;
mod retail_product_availability;
mod retail_product_price;
mod sub_category;
mod user;

pub use self::branch::Branch;
pub use self::category::Category;
pub use self::product::Product;
pub use self::retail::Retail;
pub use self::retail_product::RetailProduct;
pub use self::retail_product_availability::RetailProductAvailability;
pub use self::retail_product_price::RetailProductPrice;
pub use self::sub_category::SubCategory;
pub use self::user::{User, UserRole};
