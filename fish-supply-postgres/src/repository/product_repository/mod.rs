pub mod adjust_quantity;
pub mod create;
pub mod delete;
pub mod find_by_id;
pub mod load_all;
pub mod repo_impl;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ProductRepositoryImpl;
