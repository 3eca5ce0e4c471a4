pub mod client_repository;
pub mod db_init;
pub mod employee_repository;
pub mod product_repository;
pub mod supplier_repository;
pub mod transaction_repository;

pub use client_repository::ClientRepositoryImpl;
pub use employee_repository::EmployeeRepositoryImpl;
pub use product_repository::ProductRepositoryImpl;
pub use supplier_repository::SupplierRepositoryImpl;
pub use transaction_repository::TransactionRepositoryImpl;
