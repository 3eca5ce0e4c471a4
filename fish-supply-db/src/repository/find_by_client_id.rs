use async_trait::async_trait;
use sqlx::Database;

use crate::models::TransactionModel;

/// Repository trait for a client's purchase history
#[async_trait]
pub trait FindByClientId<DB: Database>: Send + Sync {
    /// All transactions of the client with their items, newest first
    async fn find_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Vec<TransactionModel>, Box<dyn std::error::Error + Send + Sync>>;
}
