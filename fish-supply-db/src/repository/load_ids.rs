use async_trait::async_trait;
use sqlx::Database;

/// Repository trait for listing every identifier in use
///
/// Feeds `utils::id_generator::generate_next_id` without loading whole rows.
#[async_trait]
pub trait LoadIds<DB: Database>: Send + Sync {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
