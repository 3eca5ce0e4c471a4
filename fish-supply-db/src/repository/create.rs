use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a single entity
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert a new entity
    ///
    /// # Arguments
    /// * `item` - The entity to insert; its identifier is chosen by the caller
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as stored
    /// * `Err` - An error if the insert failed (including a duplicate key)
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
