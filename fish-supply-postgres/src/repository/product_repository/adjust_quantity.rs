use async_trait::async_trait;
use fish_supply_api::check_decimal_places;
use fish_supply_db::repository::AdjustStock;
use rust_decimal::Decimal;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    /// One conditional statement, so concurrent adjustments serialise on the
    /// row lock and the quantity never goes below zero.
    pub(super) async fn adjust_quantity_impl(
        repo: &ProductRepositoryImpl,
        product_id: &str,
        delta: Decimal,
    ) -> Result<Option<Decimal>, Box<dyn Error + Send + Sync>> {
        check_decimal_places("delta", delta)?;
        let row = sqlx::query("SELECT st_adjust_product_quantity($1, $2) AS quantity")
            .bind(product_id)
            .bind(delta)
            .fetch_one(&repo.pool)
            .await?;
        let quantity: Option<Decimal> = row.try_get("quantity")?;
        if quantity.is_none() {
            tracing::debug!(product_id, %delta, "Stock adjustment refused");
        }
        Ok(quantity)
    }
}

#[async_trait]
impl AdjustStock<Postgres> for ProductRepositoryImpl {
    async fn adjust_quantity(
        &self,
        product_id: &str,
        delta: Decimal,
    ) -> Result<Option<Decimal>, Box<dyn Error + Send + Sync>> {
        Self::adjust_quantity_impl(self, product_id, delta).await
    }
}
