pub mod c001_category;
pub mod c002_product;
pub mod common;
