use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading every entity of a kind
///
/// List screens load the whole table and filter it in memory, so this is the
/// main read path.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl LoadAll<Postgres, ClientModel> for ClientRepositoryImpl {
///     async fn load_all(&self) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadAll<DB: Database, T: Identifiable>: Send + Sync {
    /// Load all entities, ordered by identifier
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All stored entities (possibly empty)
    /// * `Err` - An error if the query could not be executed
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
