pub mod catalog_repo;
pub mod models;
pub mod order_repo;

pub use catalog_repo::DieselCatalogRepository;
pub use order_repo::DieselOrderRepository;
