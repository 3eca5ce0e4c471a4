pub mod config;
pub mod connection;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::DatabaseConfig;
pub use connection::ConnectionProvider;
pub use postgres_repositories::{Gateways, PostgresRepositories, Repositories};

#[cfg(test)]
pub mod test_helper;
