use async_trait::async_trait;
use fish_supply_db::models::TransactionModel;
use fish_supply_db::repository::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{TransactionRepositoryImpl, TRANSACTION_COLUMNS};

impl TransactionRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &TransactionRepositoryImpl,
    ) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {TRANSACTION_COLUMNS} FROM sales_transaction ORDER BY transaction_date DESC, transaction_id DESC"
        );
        let rows = sqlx::query(&query).fetch_all(&repo.pool).await?;
        repo.with_items(&rows).await
    }
}

#[async_trait]
impl LoadAll<Postgres, TransactionModel> for TransactionRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
