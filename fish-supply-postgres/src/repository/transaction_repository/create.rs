use async_trait::async_trait;
use fish_supply_db::models::{TransactionItemModel, TransactionModel};
use fish_supply_db::repository::Create;
use rust_decimal::Decimal;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{TransactionRepositoryImpl, ITEM_COLUMNS, TRANSACTION_COLUMNS};
use crate::utils::TryFromRow;

impl TransactionRepositoryImpl {
    /// Header, lines and the matching stock decrements commit together. A line
    /// asking for more than is on hand aborts the whole sale and leaves every
    /// quantity untouched.
    pub(super) async fn create_impl(
        repo: &TransactionRepositoryImpl,
        item: TransactionModel,
    ) -> Result<TransactionModel, Box<dyn Error + Send + Sync>> {
        // stock moves by exactly what the stored lines say
        item.check_decimal_places()?;
        let mut tx = repo.pool.begin().await?;

        let header_query = format!(
            r#"
            INSERT INTO sales_transaction
            (transaction_id, employee_id, client_id, total_amount, transaction_date, payment_status, delivery_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TRANSACTION_COLUMNS}
            "#
        );
        let row = sqlx::query(&header_query)
            .bind(item.transaction_id.as_str())
            .bind(item.employee_id.as_str())
            .bind(item.client_id.as_str())
            .bind(item.total_amount)
            .bind(item.transaction_date)
            .bind(item.payment_status.as_str())
            .bind(item.delivery_status.as_str())
            .fetch_one(&mut *tx)
            .await?;
        let mut saved = TransactionModel::try_from_row(&row)?;

        let item_query = format!(
            r#"
            INSERT INTO transaction_item (id, transaction_id, line_no, product_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ITEM_COLUMNS}
            "#
        );
        for (line_no, line) in item.items.iter().enumerate() {
            let remaining: Option<Decimal> = sqlx::query_scalar(
                r#"
                UPDATE product
                SET quantity = quantity - $2
                WHERE product_id = $1 AND quantity >= $2
                RETURNING quantity
                "#,
            )
            .bind(line.product_id.as_str())
            .bind(line.quantity)
            .fetch_optional(&mut *tx)
            .await?;

            if remaining.is_none() {
                tracing::warn!(
                    transaction_id = %item.transaction_id,
                    product_id = %line.product_id,
                    quantity = %line.quantity,
                    "Sale rejected: insufficient stock"
                );
                return Err(format!(
                    "Insufficient stock for product {} (requested {})",
                    line.product_id, line.quantity
                )
                .into());
            }

            let row = sqlx::query(&item_query)
                .bind(line.id)
                .bind(saved.transaction_id.as_str())
                .bind(i32::try_from(line_no)?)
                .bind(line.product_id.as_str())
                .bind(line.quantity)
                .bind(line.unit_price)
                .fetch_one(&mut *tx)
                .await?;
            saved.items.push(TransactionItemModel::try_from_row(&row)?);
        }

        tx.commit().await?;
        Ok(saved)
    }
}

#[async_trait]
impl Create<Postgres, TransactionModel> for TransactionRepositoryImpl {
    async fn create(&self, item: TransactionModel) -> Result<TransactionModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
