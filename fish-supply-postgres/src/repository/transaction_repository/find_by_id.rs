use async_trait::async_trait;
use fish_supply_db::models::TransactionModel;
use fish_supply_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{TransactionRepositoryImpl, TRANSACTION_COLUMNS};

impl TransactionRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &TransactionRepositoryImpl,
        id: &str,
    ) -> Result<Option<TransactionModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {TRANSACTION_COLUMNS} FROM sales_transaction WHERE transaction_id = $1");
        let rows = sqlx::query(&query).bind(id).fetch_all(&repo.pool).await?;
        Ok(repo.with_items(&rows).await?.into_iter().next())
    }
}

#[async_trait]
impl FindById<Postgres, TransactionModel> for TransactionRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Option<TransactionModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
