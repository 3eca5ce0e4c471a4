use async_trait::async_trait;
use fish_supply_db::models::{TransactionItemModel, TransactionModel};
use fish_supply_db::repository::LoadIds;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::collections::HashMap;
use std::error::Error;

use crate::utils::{get_heapless_string, TryFromRow};

pub(crate) const TRANSACTION_COLUMNS: &str =
    "transaction_id, employee_id, client_id, total_amount, transaction_date, payment_status, delivery_status";
pub(crate) const ITEM_COLUMNS: &str = "id, transaction_id, product_id, quantity, unit_price";

/// Sales transactions live in `sales_transaction`, their lines in
/// `transaction_item`. Lines keep the order they were inserted in through
/// `line_no`.
pub struct TransactionRepositoryImpl {
    pub pool: PgPool,
}

impl TransactionRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the lines of the given transactions, grouped by transaction id.
    pub(super) async fn load_items(
        &self,
        transaction_ids: &[String],
    ) -> Result<HashMap<String, Vec<TransactionItemModel>>, Box<dyn Error + Send + Sync>> {
        let mut grouped: HashMap<String, Vec<TransactionItemModel>> = HashMap::new();
        if transaction_ids.is_empty() {
            return Ok(grouped);
        }

        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM transaction_item WHERE transaction_id = ANY($1) ORDER BY transaction_id, line_no"
        );
        let rows = sqlx::query(&query)
            .bind(transaction_ids)
            .fetch_all(&self.pool)
            .await?;
        for row in rows {
            let item = TransactionItemModel::try_from_row(&row)?;
            grouped
                .entry(item.transaction_id.to_string())
                .or_default()
                .push(item);
        }
        Ok(grouped)
    }

    /// Decode header rows and fill in their lines.
    pub(super) async fn with_items(
        &self,
        rows: &[PgRow],
    ) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
        let mut transactions = rows
            .iter()
            .map(TransactionModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        let ids: Vec<String> = transactions
            .iter()
            .map(|t| t.transaction_id.to_string())
            .collect();
        let mut items = self.load_items(&ids).await?;
        for transaction in &mut transactions {
            transaction.items = items
                .remove(transaction.transaction_id.as_str())
                .unwrap_or_default();
        }
        Ok(transactions)
    }
}

impl TryFromRow<PgRow> for TransactionModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TransactionModel {
            transaction_id: get_heapless_string(row, "transaction_id")?,
            employee_id: get_heapless_string(row, "employee_id")?,
            client_id: get_heapless_string(row, "client_id")?,
            total_amount: row.try_get("total_amount")?,
            transaction_date: row.try_get("transaction_date")?,
            payment_status: get_heapless_string(row, "payment_status")?,
            delivery_status: get_heapless_string(row, "delivery_status")?,
            items: Vec::new(),
        })
    }
}

impl TryFromRow<PgRow> for TransactionItemModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TransactionItemModel {
            id: row.try_get("id")?,
            transaction_id: get_heapless_string(row, "transaction_id")?,
            product_id: get_heapless_string(row, "product_id")?,
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
        })
    }
}

#[async_trait]
impl LoadIds<Postgres> for TransactionRepositoryImpl {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT transaction_id FROM sales_transaction")
            .fetch_all(&self.pool)
            .await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("transaction_id")?);
        }
        Ok(ids)
    }
}
