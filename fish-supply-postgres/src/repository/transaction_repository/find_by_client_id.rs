use async_trait::async_trait;
use fish_supply_db::models::TransactionModel;
use fish_supply_db::repository::FindByClientId;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{TransactionRepositoryImpl, TRANSACTION_COLUMNS};

impl TransactionRepositoryImpl {
    pub(super) async fn find_by_client_id_impl(
        repo: &TransactionRepositoryImpl,
        client_id: &str,
    ) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {TRANSACTION_COLUMNS} FROM sales_transaction WHERE client_id = $1 ORDER BY transaction_date DESC, transaction_id DESC"
        );
        let rows = sqlx::query(&query)
            .bind(client_id)
            .fetch_all(&repo.pool)
            .await?;
        repo.with_items(&rows).await
    }
}

#[async_trait]
impl FindByClientId<Postgres> for TransactionRepositoryImpl {
    async fn find_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_client_id_impl(self, client_id).await
    }
}
