use async_trait::async_trait;
use fish_supply_api::check_decimal_places;
use fish_supply_db::models::TransactionModel;
use fish_supply_db::repository::Update;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{TransactionRepositoryImpl, TRANSACTION_COLUMNS};

impl TransactionRepositoryImpl {
    /// Only the header is written. Lines and stock stay as they are; the
    /// returned model carries the stored lines.
    pub(super) async fn update_impl(
        repo: &TransactionRepositoryImpl,
        item: TransactionModel,
    ) -> Result<TransactionModel, Box<dyn Error + Send + Sync>> {
        check_decimal_places("total_amount", item.total_amount)?;
        let query = format!(
            r#"
            UPDATE sales_transaction
            SET employee_id = $2, client_id = $3, total_amount = $4, transaction_date = $5,
                payment_status = $6, delivery_status = $7
            WHERE transaction_id = $1
            RETURNING {TRANSACTION_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.transaction_id.as_str())
            .bind(item.employee_id.as_str())
            .bind(item.client_id.as_str())
            .bind(item.total_amount)
            .bind(item.transaction_date)
            .bind(item.payment_status.as_str())
            .bind(item.delivery_status.as_str())
            .fetch_optional(&repo.pool)
            .await?
            .ok_or_else(|| format!("Transaction {} not found", item.transaction_id))?;
        repo.with_items(std::slice::from_ref(&row))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| format!("Transaction {} not found", item.transaction_id).into())
    }
}

#[async_trait]
impl Update<Postgres, TransactionModel> for TransactionRepositoryImpl {
    async fn update(&self, item: TransactionModel) -> Result<TransactionModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::product_repository::test_utils::create_test_product;
    use crate::repository::transaction_repository::test_utils::{create_test_transaction, seed_parties};
    use crate::test_helper::{setup_test_repos, unique_id};
    use fish_supply_db::repository::{Create, FindById, Update};
    use heapless::String as HeaplessString;
    use rust_decimal::Decimal;

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_marking_paid_keeps_lines_and_stock() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let all = repos.create_all_repositories();
        let (client, employee) = seed_parties(&all).await?;
        let product = all
            .product_repository
            .create(create_test_product(&unique_id("PID-"), 10, 100))
            .await?;

        let mut transaction = all
            .transaction_repository
            .create(create_test_transaction(
                &unique_id("TID-"),
                employee.employee_id.as_str(),
                client.client_id.as_str(),
                &[(product.product_id.as_str(), 4, 100)],
            ))
            .await?;

        transaction.payment_status = HeaplessString::try_from("Paid").unwrap();
        transaction.delivery_status = HeaplessString::try_from("Delivered").unwrap();
        let lines = transaction.items.clone();
        transaction.items.clear();

        let updated = all.transaction_repository.update(transaction.clone()).await?;
        assert_eq!(updated.payment_status.as_str(), "Paid");
        assert_eq!(updated.delivery_status.as_str(), "Delivered");
        assert_eq!(updated.items, lines);

        let product = all.product_repository.find_by_id(product.product_id.as_str()).await?.unwrap();
        assert_eq!(product.quantity, Decimal::from(6));

        Ok(())
    }
}
