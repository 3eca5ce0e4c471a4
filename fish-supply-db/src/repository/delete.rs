use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for deleting a single entity
///
/// There is no soft delete: the row is gone afterwards.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait Delete<DB: Database>: Send + Sync {
    /// Delete the entity with the given identifier
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of entities deleted (0 when it did not exist)
    /// * `Err` - An error if the delete could not be executed
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
