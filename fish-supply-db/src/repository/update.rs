use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating a single entity
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<DB: Database, T: Identifiable>: Send + Sync {
    /// Overwrite the stored entity that has the same identifier
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as stored
    /// * `Err` - An error if no entity has that identifier or the update failed
    async fn update(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
