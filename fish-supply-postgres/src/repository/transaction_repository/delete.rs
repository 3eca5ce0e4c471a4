use async_trait::async_trait;
use fish_supply_db::repository::Delete;
use rust_decimal::Decimal;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::TransactionRepositoryImpl;

impl TransactionRepositoryImpl {
    /// Every line's quantity goes back on the shelf before the transaction
    /// (and, by cascade, its lines) is removed. Both steps commit together.
    pub(super) async fn delete_impl(
        repo: &TransactionRepositoryImpl,
        id: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = repo.pool.begin().await?;

        let lines = sqlx::query(
            "SELECT product_id, quantity FROM transaction_item WHERE transaction_id = $1 ORDER BY line_no FOR UPDATE",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        for line in &lines {
            let product_id: String = line.try_get("product_id")?;
            let quantity: Decimal = line.try_get("quantity")?;
            sqlx::query("UPDATE product SET quantity = quantity + $2 WHERE product_id = $1")
                .bind(&product_id)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query("DELETE FROM sales_transaction WHERE transaction_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(transaction_id = id, restocked_lines = lines.len(), "Transaction deleted");
        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl Delete<Postgres> for TransactionRepositoryImpl {
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}
